//! Raw (unvalidated) shape of the config document.
//!
//! Mirrors the on-disk schema one to one. Every field a user may forget is an
//! `Option` so the loader can report it as a diagnostic instead of failing the
//! parse. Resolution into typed values happens in [`super::ConfigDocument::load`].
//!
//! # Example
//!
//! ```toml
//! landing = true
//! repo = "tboox/tbox"
//! edit-link = "https://github.com/tboox/tbox/edit/master/docs"
//!
//! [[lists.langs]]
//! title = "English"
//! path = "/"
//!
//! [[lists.langs]]
//! title = "中文"
//! path = "/zh/"
//!
//! [[nav.default]]
//! title = "Home"
//! path = "/"
//!
//! [[nav.default]]
//! title = "Languages"
//! type = "dropdown"
//! items = "langs"
//!
//! [[plugins]]
//! name = "docsearch"
//! apiKey = ""
//! indexName = "tbox"
//! tags = ["en"]
//! ```

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// root document
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "edit-link", skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<String>,

    /// Document-scope shared link lists, referenced by name from dropdowns.
    #[serde(skip_serializing_if = "RawMap::is_empty")]
    pub lists: RawMap<Vec<RawNavItem>>,

    /// Locale key -> menu.
    pub nav: RawMap<Vec<RawNavItem>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<RawPlugin>,
}

// ============================================================================
// nav items
// ============================================================================

/// One menu entry as written. Both link and dropdown fields are accepted;
/// the `type` tag decides which ones are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<RawItems>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

impl RawNavItem {
    pub fn link(title: &str, path: &str) -> Self {
        Self {
            title: Some(title.into()),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn dropdown(title: &str, items: RawItems) -> Self {
        Self {
            title: Some(title.into()),
            kind: Some("dropdown".into()),
            items: Some(items),
            ..Self::default()
        }
    }

    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }
}

/// Dropdown contents: a shared list name or inline entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawItems {
    Shared(String),
    Inline(Vec<RawNavItem>),
}

// ============================================================================
// plugins
// ============================================================================

/// A plugin entry: `name` plus any number of options next to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlugin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl RawPlugin {
    /// Drop `null` options, at any depth. TOML has no null.
    pub fn strip_nulls(&mut self) {
        strip_null_entries(&mut self.options);
    }
}

fn strip_null_entries(map: &mut serde_json::Map<String, serde_json::Value>) {
    map.retain(|_, value| !value.is_null());
    map.values_mut().for_each(strip_null_values);
}

fn strip_null_values(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => strip_null_entries(map),
        serde_json::Value::Array(items) => {
            items.retain(|item| !item.is_null());
            items.iter_mut().for_each(strip_null_values);
        }
        _ => {}
    }
}

// ============================================================================
// ordered map keeping duplicate keys
// ============================================================================

/// Ordered key/value pairs, duplicates kept.
///
/// Both `nav` and `lists` are maps whose keys must be unique. Deserializing
/// into a regular map would silently keep the last entry, so entries are
/// collected as-is and uniqueness is checked during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMap<V>(pub Vec<(String, V)>);

impl<V> Default for RawMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> RawMap<V> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.0.push((key.into(), value));
    }
}

impl<V> FromIterator<(String, V)> for RawMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for RawMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = RawMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of named entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(RawMap(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<V: Serialize> Serialize for RawMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ============================================================================
// tests
// ============================================================================
