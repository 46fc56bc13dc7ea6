//! Navigation configuration (`nav.toml` / `nav.json`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── raw            # On-disk schema (serde, unvalidated)
//! ├── section/       # Configuration section definitions
//! │   ├── nav/       # [nav], [lists]: menus and shared lists
//! │   └── plugin     # [[plugins]]
//! ├── types/         # Utility types
//! │   ├── error      # ValidationError, ConfigDiagnostics, ConfigError
//! │   ├── field      # FieldPath
//! │   └── handle     # Reloadable document handle
//! └── mod.rs         # ConfigDocument (this file)
//! ```
//!
//! # Sections
//!
//! | Key            | Purpose                                           |
//! |----------------|---------------------------------------------------|
//! | root scalars   | `title`, `landing`, `repo`, `twitter`, `url`, ... |
//! | `[lists]`      | Shared link lists referenced by dropdowns         |
//! | `[nav]`        | Menus by locale key, `default` required           |
//! | `[[plugins]]`  | Plugin name + options                             |

pub mod raw;
pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    DEFAULT_LOCALE, DOCSEARCH, DocSearchOptions, Dropdown, DropdownItems, Link, Locale,
    LocaleTable, NavItem, PluginDescriptor, PluginKind, SharedList, SharedListRef,
    SharedListRegistry, SharedLists, validate_item, validate_plugins,
};
pub use types::{ConfigDiagnostics, ConfigError, ConfigHandle, ErrorKind, FieldPath, ValidationError};

use raw::{RawDocument, RawPlugin};
use section::plugin::validate_plugins_into;
use std::path::Path;

/// Input syntax of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

impl Format {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

// ============================================================================
// root document
// ============================================================================

/// Validated, resolved configuration. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    title: Option<String>,
    landing: bool,
    repo: Option<String>,
    twitter: Option<String>,
    url: Option<String>,
    edit_link: Option<String>,
    lists: SharedLists,
    locales: LocaleTable,
    plugins: Vec<PluginDescriptor>,
}

impl ConfigDocument {
    /// Validate and resolve a raw document.
    ///
    /// Every problem in the document is reported at once; a document is
    /// returned only if there are none.
    pub fn load(raw: &RawDocument) -> Result<Self, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        let document = Self::load_into(raw, &mut diag);
        diag.into_result()?;
        document.ok_or_else(ConfigDiagnostics::new)
    }

    fn load_into(raw: &RawDocument, diag: &mut ConfigDiagnostics) -> Option<Self> {
        // all lists are registered before any dropdown resolves against them
        let registry = SharedListRegistry::from_raw(&raw.lists, diag);
        let locales = LocaleTable::build_into(&raw.nav, &registry, diag);

        let plugins_path = FieldPath::new(section::plugin::PLUGINS_KEY);
        let plugins: Vec<_> = raw
            .plugins
            .iter()
            .enumerate()
            .filter_map(|(i, p)| PluginDescriptor::from_raw(p, &plugins_path.index(i), diag))
            .collect();
        validate_plugins_into(&plugins, diag);

        if diag.has_errors() {
            return None;
        }

        Some(Self {
            title: raw.title.clone(),
            landing: raw.landing.unwrap_or(false),
            repo: raw.repo.clone(),
            twitter: raw.twitter.clone(),
            url: raw.url.clone(),
            edit_link: raw.edit_link.clone(),
            lists: registry.finish(),
            locales: locales?,
            plugins,
        })
    }

    /// Parse and load document text.
    pub fn from_str(content: &str, format: Format) -> Result<Self, ConfigError> {
        let (raw, ignored) = Self::parse_with_ignored(content, format)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.warn(FieldPath::new(field), "unknown field");
        }

        match Self::load_into(&raw, &mut diag) {
            Some(document) => {
                diag.print_warnings();
                Ok(document)
            }
            None => Err(ConfigError::Diagnostics(diag)),
        }
    }

    /// Read and load a config file; the format follows the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_content(&content, path)
    }

    pub(crate) fn from_content(content: &str, path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("config"; "loading {}", path.display());
        Self::from_str(content, Format::from_path(path))
    }

    /// Parse content, collecting any unknown fields.
    pub fn parse_with_ignored(
        content: &str,
        format: Format,
    ) -> Result<(RawDocument, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let raw: RawDocument = match format {
            Format::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })?
            }
            Format::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let raw = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })?;
                deserializer.end()?;
                raw
            }
        };
        Ok((raw, ignored))
    }

    // ========================================================================
    // accessors
    // ========================================================================

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether the site has a landing page. Defaults to `false`.
    pub const fn landing(&self) -> bool {
        self.landing
    }

    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    pub fn twitter(&self) -> Option<&str> {
        self.twitter.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn edit_link(&self) -> Option<&str> {
        self.edit_link.as_deref()
    }

    pub fn lists(&self) -> &SharedLists {
        &self.lists
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Menu for a request path; see [`crate::resolve::resolve`].
    pub fn menu_for(&self, request_path: &str) -> &[NavItem] {
        crate::resolve::resolve(&self.locales, request_path)
    }

    // ========================================================================
    // serialization
    // ========================================================================

    /// Back to the on-disk shape. Shared references are written by name.
    pub fn to_raw(&self) -> RawDocument {
        RawDocument {
            title: self.title.clone(),
            landing: Some(self.landing),
            repo: self.repo.clone(),
            twitter: self.twitter.clone(),
            url: self.url.clone(),
            edit_link: self.edit_link.clone(),
            lists: self.lists.to_raw(),
            nav: self.locales.to_raw(),
            plugins: self.plugins.iter().map(PluginDescriptor::to_raw).collect(),
        }
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.to_raw()).map_err(ConfigError::SerializeJson)
    }

    /// TOML rendering. `null` plugin options have no TOML form and are
    /// left out, so they don't survive a TOML round trip.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut raw = self.to_raw();
        raw.plugins.iter_mut().for_each(RawPlugin::strip_nulls);
        Ok(toml::to_string_pretty(&raw)?)
    }
}

// ============================================================================
// tests
// ============================================================================
