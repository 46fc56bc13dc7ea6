//! Menu entries: links and dropdowns of links.

use super::shared::{SharedList, SharedListRef, SharedListRegistry};
use crate::config::raw::{RawItems, RawNavItem};
use crate::config::{ConfigDiagnostics, FieldPath, ValidationError};
use rustc_hash::FxHashSet;

/// Value of the `type` tag for a dropdown entry.
pub const DROPDOWN_TYPE: &str = "dropdown";
/// Value of the `type` tag for a plain link (also the default).
pub const LINK_TYPE: &str = "link";

// ============================================================================
// Link
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub title: String,
    /// Absolute URL or site-relative path.
    pub path: String,
    /// Whether active-state matching requires full equality.
    pub exact: bool,
}

impl Link {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            exact: false,
        }
    }

    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Whether `path` points off-site (absolute URL with a host).
    pub fn is_external(&self) -> bool {
        url::Url::parse(&self.path).is_ok_and(|url| url.host_str().is_some())
    }

    /// Active-state check used when rendering a menu.
    ///
    /// External links never match. `exact` links need the whole path to be
    /// equal, others match any request below them.
    pub fn matches(&self, request_path: &str) -> bool {
        self.matches_with(request_path, self.exact)
    }

    fn matches_with(&self, request_path: &str, exact: bool) -> bool {
        if self.is_external() {
            return false;
        }
        if exact {
            self.path == request_path
        } else {
            request_path.starts_with(&self.path)
        }
    }

    /// Whether both title and path are non-blank.
    pub fn is_valid(&self) -> bool {
        !is_blank(&self.title) && !is_blank(&self.path)
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        require_non_empty(&self.title, path.key("title"), diag);
        require_non_empty(&self.path, path.key("path"), diag);
    }

    /// Convert a raw entry that must be a link.
    ///
    /// Entries tagged as dropdowns are rejected with `NestedDropdown`; they
    /// only occur where a dropdown's links are expected.
    pub(crate) fn from_raw(
        raw: &RawNavItem,
        path: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Option<Self> {
        match raw.kind.as_deref() {
            None | Some(LINK_TYPE) => {}
            Some(DROPDOWN_TYPE) => {
                diag.error(ValidationError::NestedDropdown { path: path.clone() });
                return None;
            }
            Some(other) => {
                diag.error(ValidationError::UnknownItemType {
                    path: path.key("type"),
                    kind: other.to_string(),
                });
                return None;
            }
        }

        let title = required(raw.title.as_ref(), path.key("title"), diag);
        let link_path = required(raw.path.as_ref(), path.key("path"), diag);
        Some(Self {
            title: title?.clone(),
            path: link_path?.clone(),
            exact: raw.exact.unwrap_or(false),
        })
    }

    pub(crate) fn to_raw(&self) -> RawNavItem {
        let raw = RawNavItem::link(&self.title, &self.path);
        if self.exact { raw.with_exact(true) } else { raw }
    }
}

// ============================================================================
// Dropdown
// ============================================================================

/// Where a dropdown's links live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownItems {
    /// Alias of a document-scope list.
    Shared(SharedList),
    /// Links owned by this dropdown.
    Inline(Vec<Link>),
}

impl DropdownItems {
    pub fn links(&self) -> &[Link] {
        match self {
            Self::Shared(list) => list.links(),
            Self::Inline(links) => links,
        }
    }

    pub fn shared(&self) -> Option<&SharedList> {
        match self {
            Self::Shared(list) => Some(list),
            Self::Inline(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub title: String,
    pub items: DropdownItems,
    pub exact: bool,
}

impl Dropdown {
    pub fn links(&self) -> &[Link] {
        self.items.links()
    }

    /// Validate the dropdown itself and its inline links.
    ///
    /// Links of a shared list are validated once, where the list is declared;
    /// a dropdown without a single valid link is reported either way.
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        require_non_empty(&self.title, path.key("title"), diag);

        let items_path = path.key("items");
        if let DropdownItems::Inline(links) = &self.items {
            validate_links(links, &items_path, diag);
        }
        if !self.links().iter().any(Link::is_valid) {
            diag.error(ValidationError::EmptyDropdownItems { path: items_path });
        }
    }

    fn to_raw(&self) -> RawNavItem {
        let items = match &self.items {
            DropdownItems::Shared(list) => RawItems::Shared(list.name().to_string()),
            DropdownItems::Inline(links) => {
                RawItems::Inline(links.iter().map(Link::to_raw).collect())
            }
        };
        RawNavItem::dropdown(&self.title, items).with_exact(self.exact)
    }
}

// ============================================================================
// NavItem
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link(Link),
    Dropdown(Dropdown),
}

impl NavItem {
    pub fn title(&self) -> &str {
        match self {
            Self::Link(link) => &link.title,
            Self::Dropdown(dropdown) => &dropdown.title,
        }
    }

    pub const fn exact(&self) -> bool {
        match self {
            Self::Link(link) => link.exact,
            Self::Dropdown(dropdown) => dropdown.exact,
        }
    }

    pub fn as_dropdown(&self) -> Option<&Dropdown> {
        match self {
            Self::Dropdown(dropdown) => Some(dropdown),
            Self::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            Self::Dropdown(_) => None,
        }
    }

    /// Whether this entry should be shown as active for `request_path`.
    ///
    /// A dropdown is active when any of its links is.
    pub fn matches(&self, request_path: &str) -> bool {
        match self {
            Self::Link(link) => link.matches(request_path),
            Self::Dropdown(dropdown) => dropdown
                .links()
                .iter()
                .any(|link| link.matches_with(request_path, dropdown.exact || link.exact)),
        }
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Link(link) => link.validate(path, diag),
            Self::Dropdown(dropdown) => dropdown.validate(path, diag),
        }
    }

    /// Convert and resolve one raw menu entry.
    ///
    /// Missing fields and bad tags are reported and yield `None`; shared
    /// references are resolved against `registry`, which must be complete.
    pub(crate) fn from_raw(
        raw: &RawNavItem,
        path: &FieldPath,
        registry: &SharedListRegistry,
        diag: &mut ConfigDiagnostics,
    ) -> Option<Self> {
        match raw.kind.as_deref() {
            Some(DROPDOWN_TYPE) => dropdown_from_raw(raw, path, registry, diag).map(Self::Dropdown),
            _ => Link::from_raw(raw, path, diag).map(Self::Link),
        }
    }

    pub(crate) fn to_raw(&self) -> RawNavItem {
        match self {
            Self::Link(link) => link.to_raw(),
            Self::Dropdown(dropdown) => dropdown.to_raw(),
        }
    }
}

fn dropdown_from_raw(
    raw: &RawNavItem,
    path: &FieldPath,
    registry: &SharedListRegistry,
    diag: &mut ConfigDiagnostics,
) -> Option<Dropdown> {
    let title = required(raw.title.as_ref(), path.key("title"), diag);
    let items_path = path.key("items");

    let items = match required(raw.items.as_ref(), items_path.clone(), diag)? {
        RawItems::Shared(name) => match registry.resolve(&SharedListRef::new(name), &items_path) {
            Ok(list) => DropdownItems::Shared(list),
            Err(err) => {
                diag.error(err);
                return None;
            }
        },
        RawItems::Inline(entries) => {
            let mut links = Vec::with_capacity(entries.len());
            for (i, entry) in entries.iter().enumerate() {
                if let Some(link) = Link::from_raw(entry, &items_path.index(i), diag) {
                    links.push(link);
                }
            }
            DropdownItems::Inline(links)
        }
    };

    Some(Dropdown {
        title: title?.clone(),
        items,
        exact: raw.exact.unwrap_or(false),
    })
}

// ============================================================================
// validation helpers
// ============================================================================

/// Validate a standalone item, including the links of a shared list it
/// refers to. Errors are located relative to the item itself.
pub fn validate_item(item: &NavItem) -> Result<(), ConfigDiagnostics> {
    let mut diag = ConfigDiagnostics::new();
    let path = FieldPath::root();
    item.validate(&path, &mut diag);
    if let NavItem::Dropdown(dropdown) = item
        && let DropdownItems::Shared(list) = &dropdown.items
    {
        validate_links(list.links(), &path.key("items"), &mut diag);
    }
    diag.into_result()
}

/// Validate each link and title uniqueness across them.
pub(crate) fn validate_links(links: &[Link], path: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        link.validate(&path.index(i), diag);
    }
    check_unique_titles(links.iter().map(|l| l.title.as_str()), path, diag);
}

/// Report every title that repeats an earlier one (case-sensitive).
pub(crate) fn check_unique_titles<'a>(
    titles: impl Iterator<Item = &'a str>,
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen = FxHashSet::default();
    for (i, title) in titles.enumerate() {
        // blank titles are reported on their own
        if !is_blank(title) && !seen.insert(title) {
            diag.error(ValidationError::DuplicateTitle {
                path: path.index(i).key("title"),
                title: title.to_string(),
            });
        }
    }
}

/// Empty or whitespace only; such required strings count as missing content.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require_non_empty(value: &str, path: FieldPath, diag: &mut ConfigDiagnostics) {
    if is_blank(value) {
        diag.error(ValidationError::EmptyField { path });
    }
}

fn required<'a, T>(value: Option<&'a T>, path: FieldPath, diag: &mut ConfigDiagnostics) -> Option<&'a T> {
    if value.is_none() {
        diag.error(ValidationError::MissingField { path });
    }
    value
}

// ============================================================================
// tests
// ============================================================================
