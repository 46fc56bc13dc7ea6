//! Locale key -> menu table.

use super::item::{NavItem, check_unique_titles};
use super::shared::SharedListRegistry;
use crate::config::raw::{RawMap, RawNavItem};
use crate::config::{ConfigDiagnostics, FieldPath, ValidationError};
use rustc_hash::FxHashMap;

/// Locale every table must declare; used when no other locale matches.
pub const DEFAULT_LOCALE: &str = "default";
/// Root key holding the locale menus.
pub const NAV_KEY: &str = "nav";

/// One locale's top-level menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    key: String,
    items: Vec<NavItem>,
}

impl Locale {
    pub fn new(key: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_LOCALE
    }

    /// Request path prefix served by this locale, e.g. `/zh/`.
    pub fn prefix(&self) -> String {
        format!("/{}/", self.key.trim_matches('/'))
    }
}

/// Menus by locale, in declaration order. Always contains `default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    locales: Vec<Locale>,
    index: FxHashMap<String, usize>,
    default: usize,
}

impl LocaleTable {
    /// Build from already resolved locales.
    ///
    /// Fails if `default` is missing or a key repeats.
    pub fn from_locales(locales: Vec<Locale>) -> Result<Self, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        let table = Self::assemble(locales, &mut diag);
        diag.into_result()?;
        table.ok_or_else(ConfigDiagnostics::new)
    }

    /// Convert and validate every raw locale menu.
    ///
    /// Errors from all locales are reported together.
    pub fn build(
        raw: &RawMap<Vec<RawNavItem>>,
        registry: &SharedListRegistry,
    ) -> Result<Self, ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        let table = Self::build_into(raw, registry, &mut diag);
        diag.into_result()?;
        table.ok_or_else(ConfigDiagnostics::new)
    }

    /// Like [`Self::build`], collecting into a shared diagnostics sink.
    ///
    /// Returns `None` only when no table can be formed (missing `default`).
    pub(crate) fn build_into(
        raw: &RawMap<Vec<RawNavItem>>,
        registry: &SharedListRegistry,
        diag: &mut ConfigDiagnostics,
    ) -> Option<Self> {
        let root = FieldPath::new(NAV_KEY);
        let mut locales = Vec::with_capacity(raw.len());

        for (key, entries) in raw.iter() {
            let path = root.key(key);
            if key.trim_matches('/').trim().is_empty() {
                diag.error(ValidationError::EmptyField { path });
                continue;
            }

            let mut items = Vec::with_capacity(entries.len());
            for (i, entry) in entries.iter().enumerate() {
                let item_path = path.index(i);
                if let Some(item) = NavItem::from_raw(entry, &item_path, registry, diag) {
                    item.validate(&item_path, diag);
                    items.push(item);
                }
            }
            // raw titles, so indices stay aligned when an entry failed to convert
            check_unique_titles(
                entries.iter().map(|e| e.title.as_deref().unwrap_or_default()),
                &path,
                diag,
            );

            locales.push(Locale::new(key, items));
        }

        Self::assemble(locales, diag)
    }

    fn assemble(locales: Vec<Locale>, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let root = FieldPath::new(NAV_KEY);
        let mut index = FxHashMap::default();
        let mut unique = Vec::with_capacity(locales.len());

        for locale in locales {
            if index.contains_key(locale.key()) {
                diag.error(ValidationError::DuplicateLocaleKey {
                    path: root.key(locale.key()),
                    key: locale.key().to_string(),
                });
                continue;
            }
            index.insert(locale.key().to_string(), unique.len());
            unique.push(locale);
        }

        let Some(&default) = index.get(DEFAULT_LOCALE) else {
            diag.error(ValidationError::MissingDefaultLocale { path: root });
            return None;
        };

        crate::debug!("nav"; "locales: {}", unique.iter().map(Locale::key).collect::<Vec<_>>().join(", "));
        Some(Self {
            locales: unique,
            index,
            default,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Locale> {
        self.index.get(key).map(|&i| &self.locales[i])
    }

    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default]
    }

    /// Locales in declaration order, `default` included.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(Locale::key)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub(crate) fn to_raw(&self) -> RawMap<Vec<RawNavItem>> {
        self.locales
            .iter()
            .map(|locale| (locale.key.clone(), locale.items.iter().map(NavItem::to_raw).collect()))
            .collect()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorKind;
    use crate::config::raw::RawItems;
    use crate::config::section::nav::Link;

    fn registry_with_langs() -> SharedListRegistry {
        let mut registry = SharedListRegistry::new();
        registry
            .register("langs", vec![Link::new("English", "/home"), Link::new("中文", "/zh/")])
            .unwrap();
        registry
    }

    fn langs_dropdown(title: &str) -> RawNavItem {
        RawNavItem::dropdown(title, RawItems::Shared("langs".into())).with_exact(true)
    }

    #[test]
    fn test_build_two_locales_share_list() {
        let mut raw = RawMap::default();
        raw.push("default", vec![RawNavItem::link("Home", "/home"), langs_dropdown("English")]);
        raw.push("zh", vec![RawNavItem::link("首页", "/zh/"), langs_dropdown("中文")]);

        let table = LocaleTable::build(&raw, &registry_with_langs()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys().collect::<Vec<_>>(), ["default", "zh"]);
        assert!(table.default_locale().is_default());

        let en = table.default_locale().items()[1].as_dropdown().unwrap();
        let zh = table.get("zh").unwrap().items()[1].as_dropdown().unwrap();
        assert!(en.items.shared().unwrap().ptr_eq(zh.items.shared().unwrap()));
        assert!(en.exact);
    }

    #[test]
    fn test_missing_default() {
        let mut raw = RawMap::default();
        raw.push("zh", vec![RawNavItem::link("首页", "/zh/")]);
        let err = LocaleTable::build(&raw, &SharedListRegistry::new()).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.contains(ErrorKind::MissingDefaultLocale));
    }

    #[test]
    fn test_duplicate_key() {
        let mut raw = RawMap::default();
        raw.push("default", vec![]);
        raw.push("zh", vec![]);
        raw.push("zh", vec![]);
        let err = LocaleTable::build(&raw, &SharedListRegistry::new()).unwrap_err();
        assert!(err.contains(ErrorKind::DuplicateLocaleKey));
        assert_eq!(err.errors()[0].path().as_str(), "nav.zh");
    }

    #[test]
    fn test_errors_aggregated_across_locales() {
        let mut raw = RawMap::default();
        raw.push("default", vec![RawNavItem::link("Home", ""), RawNavItem::link("Home", "/x")]);
        raw.push(
            "zh",
            vec![RawNavItem::dropdown("语言", RawItems::Shared("nope".into()))],
        );

        let err = LocaleTable::build(&raw, &SharedListRegistry::new()).unwrap_err();
        assert!(err.contains(ErrorKind::EmptyField));
        assert!(err.contains(ErrorKind::DuplicateTitle));
        assert!(err.contains(ErrorKind::DanglingDropdownReference));
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn test_from_locales() {
        let table = LocaleTable::from_locales(vec![
            Locale::new("default", vec![]),
            Locale::new("zh", vec![]),
        ])
        .unwrap();
        assert_eq!(table.get("zh").unwrap().prefix(), "/zh/");
        assert!(table.get("fr").is_none());

        let err = LocaleTable::from_locales(vec![Locale::new("zh", vec![])]).unwrap_err();
        assert!(err.contains(ErrorKind::MissingDefaultLocale));
    }
}
