//! `nav` and `lists` configuration: per-locale menus.
//!
//! # Example
//!
//! ```toml
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
//! exact = true
//!
//! [[nav.default]]
//! title = "Languages"
//! type = "dropdown"
//! items = "langs"
//!
//! [[nav.zh]]
//! title = "首页"
//! path = "/zh/"
//! ```
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `item`   | `NavItem` (link / dropdown) and its validation  |
//! | `shared` | Shared list registry (`lists.<name>`)           |
//! | `locale` | `LocaleTable` with the mandatory `default` menu |

mod item;
mod locale;
mod shared;

pub use item::{DROPDOWN_TYPE, Dropdown, DropdownItems, LINK_TYPE, Link, NavItem, validate_item};
pub use locale::{DEFAULT_LOCALE, Locale, LocaleTable, NAV_KEY};
pub use shared::{LISTS_KEY, SharedList, SharedListRef, SharedListRegistry, SharedLists};
