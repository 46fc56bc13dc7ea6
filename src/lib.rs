//! Tola-nav - locale-aware navigation and plugin configuration for
//! static documentation sites.
//!
//! Loads a `nav.toml` (or `nav.json`) into an immutable [`ConfigDocument`]:
//! per-locale menus with shared dropdown lists resolved, and validated plugin
//! descriptors. [`resolve`] picks the menu for a request path.
//!
//! ```ignore
//! let doc = ConfigDocument::from_path("nav.toml")?;
//! for item in doc.menu_for("/zh/manual") {
//!     println!("{}", item.title());
//! }
//! ```

pub mod config;
pub mod logger;
pub mod resolve;

pub use config::{
    ConfigDiagnostics, ConfigDocument, ConfigError, ConfigHandle, ErrorKind, FieldPath, Format,
    LocaleTable, NavItem, PluginDescriptor, ValidationError,
};
pub use resolve::{resolve, resolve_locale};
