//! Shared link lists.
//!
//! A shared list is declared once under `lists` and referenced by name from
//! any number of dropdowns, in any locale. Every reference holds the same
//! `Arc`, so the links exist exactly once in memory.
//!
//! ```toml
//! [[lists.langs]]
//! title = "English"
//! path = "/"
//!
//! [[nav.zh]]
//! title = "语言"
//! type = "dropdown"
//! items = "langs"
//! ```

use super::item::{Link, validate_links};
use crate::config::raw::{RawMap, RawNavItem};
use crate::config::{ConfigDiagnostics, FieldPath, ValidationError};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Root key holding the shared lists.
pub const LISTS_KEY: &str = "lists";

/// Name of a shared list, as written in a dropdown's `items`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedListRef(String);

impl SharedListRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A canonical list of links. Clones are aliases of the same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedList {
    name: Arc<str>,
    links: Arc<[Link]>,
}

impl SharedList {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Whether both handles alias the same canonical list.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.links, &other.links)
    }
}

// ============================================================================
// registry
// ============================================================================

/// Write-once alias table: all lists are registered, then dropdowns resolve
/// against it.
#[derive(Debug, Default)]
pub struct SharedListRegistry {
    lists: FxHashMap<Arc<str>, SharedList>,
    /// Declaration order, for serialization.
    order: Vec<Arc<str>>,
}

impl SharedListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `links` under `name`. Fails if the name is already taken.
    pub fn register(
        &mut self,
        name: &str,
        links: Vec<Link>,
    ) -> Result<SharedListRef, ValidationError> {
        if self.lists.contains_key(name) {
            return Err(ValidationError::DuplicateSharedList {
                path: FieldPath::new(LISTS_KEY).key(name),
                name: name.to_string(),
            });
        }

        let name: Arc<str> = Arc::from(name);
        let list = SharedList {
            name: Arc::clone(&name),
            links: Arc::from(links),
        };
        self.lists.insert(Arc::clone(&name), list);
        self.order.push(Arc::clone(&name));
        Ok(SharedListRef(name.to_string()))
    }

    /// Look up a registered list. `at` locates the referring dropdown.
    pub fn resolve(
        &self,
        reference: &SharedListRef,
        at: &FieldPath,
    ) -> Result<SharedList, ValidationError> {
        self.lists
            .get(reference.name())
            .cloned()
            .ok_or_else(|| ValidationError::DanglingDropdownReference {
                path: at.clone(),
                name: reference.name().to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Convert, validate and register every list of the raw document.
    ///
    /// A list with broken entries is still registered with the entries that
    /// converted, so references to it don't add dangling errors on top.
    pub(crate) fn from_raw(raw: &RawMap<Vec<RawNavItem>>, diag: &mut ConfigDiagnostics) -> Self {
        let mut registry = Self::new();
        let root = FieldPath::new(LISTS_KEY);

        for (name, entries) in raw.iter() {
            let path = root.key(name);
            if name.trim().is_empty() {
                diag.error(ValidationError::EmptyField { path });
                continue;
            }

            let links: Vec<Link> = entries
                .iter()
                .enumerate()
                .filter_map(|(i, entry)| Link::from_raw(entry, &path.index(i), diag))
                .collect();
            validate_links(&links, &path, diag);

            if let Err(err) = registry.register(name, links) {
                diag.error(err);
            }
        }

        crate::debug!("lists"; "registered {} shared list(s)", registry.len());
        registry
    }

    /// Freeze into the read-only form kept by the document.
    pub fn finish(self) -> SharedLists {
        let Self { mut lists, order } = self;
        SharedLists(order.iter().filter_map(|name| lists.remove(name)).collect())
    }
}

// ============================================================================
// resolved lists
// ============================================================================

/// Shared lists of a loaded document, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedLists(Vec<SharedList>);

impl SharedLists {
    pub fn get(&self, name: &str) -> Option<&SharedList> {
        self.0.iter().find(|list| list.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedList> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn to_raw(&self) -> RawMap<Vec<RawNavItem>> {
        self.0
            .iter()
            .map(|list| (list.name().to_string(), list.links().iter().map(Link::to_raw).collect()))
            .collect()
    }
}

// ============================================================================
// tests
// ============================================================================
