//! `[[plugins]]` descriptors.
//!
//! Each entry names a plugin; every other key is an option handed to it.
//! Options of known plugin kinds are checked for shape, the rest pass through
//! untouched.
//!
//! # Example
//!
//! ```toml
//! [[plugins]]
//! name = "docsearch"
//! apiKey = "..."
//! indexName = "tbox"
//! tags = ["en"]
//! ```

use crate::config::raw::RawPlugin;
use crate::config::{ConfigDiagnostics, FieldPath, ValidationError};
use serde::Serialize;
use serde_json::{Map, Value};

/// Root key holding the plugin list.
pub const PLUGINS_KEY: &str = "plugins";
/// Name of the Algolia DocSearch plugin.
pub const DOCSEARCH: &str = "docsearch";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    DocSearch,
    /// Not known here; options are opaque.
    Other,
}

impl PluginKind {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(DOCSEARCH) {
            Self::DocSearch
        } else {
            Self::Other
        }
    }
}

/// A plugin name with its option bag, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub options: Map<String, Value>,
}

/// Typed view of DocSearch options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSearchOptions {
    pub api_key: String,
    pub index_name: String,
    pub tags: Vec<String>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, options: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn kind(&self) -> PluginKind {
        PluginKind::from_name(&self.name)
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Typed DocSearch options, if this is a valid DocSearch descriptor.
    pub fn docsearch(&self) -> Option<DocSearchOptions> {
        if self.kind() != PluginKind::DocSearch {
            return None;
        }
        let tags = match self.option("tags") {
            None => Vec::new(),
            Some(value) => value
                .as_array()?
                .iter()
                .map(|tag| tag.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()?,
        };
        Some(DocSearchOptions {
            api_key: self.option("apiKey")?.as_str()?.to_string(),
            index_name: self.option("indexName")?.as_str()?.to_string(),
            tags,
        })
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(ValidationError::EmptyField {
                path: path.key("name"),
            });
        }

        match self.kind() {
            PluginKind::DocSearch => self.validate_docsearch(path, diag),
            PluginKind::Other => {
                crate::debug!("plugins"; "passing `{}` through unchecked", self.name);
            }
        }
    }

    fn validate_docsearch(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        // apiKey may be empty
        self.string_option("apiKey", path, diag);

        if let Some(index_name) = self.string_option("indexName", path, diag)
            && index_name.trim().is_empty()
        {
            diag.error(ValidationError::EmptyIndexName {
                path: path.key("indexName"),
            });
        }

        let tags_path = path.key("tags");
        match self.option("tags") {
            None => {}
            Some(Value::Array(tags)) => {
                for (i, tag) in tags.iter().enumerate() {
                    if !tag.is_string() {
                        diag.error(ValidationError::InvalidType {
                            path: tags_path.index(i),
                            expected: "a string",
                        });
                    }
                }
            }
            Some(_) => diag.error(ValidationError::InvalidType {
                path: tags_path,
                expected: "a list of strings",
            }),
        }
    }

    /// Required string option; reports missing or mistyped values.
    fn string_option(
        &self,
        key: &str,
        path: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Option<&str> {
        match self.option(key) {
            None => {
                diag.error(ValidationError::MissingField { path: path.key(key) });
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                diag.error(ValidationError::InvalidType {
                    path: path.key(key),
                    expected: "a string",
                });
                None
            }
        }
    }

    pub(crate) fn from_raw(
        raw: &RawPlugin,
        path: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Option<Self> {
        let Some(name) = &raw.name else {
            diag.error(ValidationError::MissingField {
                path: path.key("name"),
            });
            return None;
        };
        Some(Self::new(name.clone(), raw.options.clone()))
    }

    pub(crate) fn to_raw(&self) -> RawPlugin {
        RawPlugin {
            name: Some(self.name.clone()),
            options: self.options.clone(),
        }
    }
}

/// Validate a descriptor list, reporting every problem.
pub fn validate_plugins(descriptors: &[PluginDescriptor]) -> Result<(), ConfigDiagnostics> {
    let mut diag = ConfigDiagnostics::new();
    validate_plugins_into(descriptors, &mut diag);
    diag.into_result()
}

pub(crate) fn validate_plugins_into(descriptors: &[PluginDescriptor], diag: &mut ConfigDiagnostics) {
    let root = FieldPath::new(PLUGINS_KEY);
    for (i, descriptor) in descriptors.iter().enumerate() {
        descriptor.validate(&root.index(i), diag);
    }
}

// ============================================================================
// tests
// ============================================================================
