//! Configuration section definitions.

pub mod nav;
pub mod plugin;

pub use nav::{
    DEFAULT_LOCALE, Dropdown, DropdownItems, Link, Locale, LocaleTable, NavItem, SharedList,
    SharedListRef, SharedListRegistry, SharedLists, validate_item,
};
pub use plugin::{DOCSEARCH, DocSearchOptions, PluginDescriptor, PluginKind, validate_plugins};
