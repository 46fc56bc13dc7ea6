//! Request path -> locale menu.
//!
//! A locale `zh` serves every request under `/zh/`. Requests that match no
//! locale, and the site root, get the `default` menu.
//!
//! When several locale prefixes match (e.g. `zh` and `zh/tw` for
//! `/zh/tw/intro`), the longest prefix wins; equal lengths go to the locale
//! declared first.

use crate::config::{Locale, LocaleTable, NavItem};
use std::borrow::Cow;

/// Menu to show for `request_path`.
///
/// Returns a reference into `table`: two paths under the same locale yield
/// the same slice.
pub fn resolve<'a>(table: &'a LocaleTable, request_path: &str) -> &'a [NavItem] {
    resolve_locale(table, request_path).items()
}

/// Locale serving `request_path`.
pub fn resolve_locale<'a>(table: &'a LocaleTable, request_path: &str) -> &'a Locale {
    let path = normalize(request_path);
    if path == "/" {
        return table.default_locale();
    }

    let mut best: Option<(&Locale, usize)> = None;
    for locale in table.iter().filter(|l| !l.is_default()) {
        let Some(len) = prefix_match(locale, &path) else {
            continue;
        };
        // strictly longer only: ties keep the earlier declaration
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((locale, len));
        }
    }

    best.map_or_else(|| table.default_locale(), |(locale, _)| locale)
}

impl LocaleTable {
    /// Shorthand for [`resolve`].
    pub fn resolve(&self, request_path: &str) -> &[NavItem] {
        resolve(self, request_path)
    }
}

/// Length of the locale prefix if it matches `path`.
///
/// `/zh` on its own counts as `/zh/`.
fn prefix_match(locale: &Locale, path: &str) -> Option<usize> {
    let prefix = locale.prefix();
    if path.starts_with(&prefix) || path == prefix.trim_end_matches('/') {
        Some(prefix.len())
    } else {
        None
    }
}

/// Reduce a request to its path: drop scheme/host, query and fragment, and
/// make sure it starts with `/`.
fn normalize(request_path: &str) -> Cow<'_, str> {
    let trimmed = request_path.trim();

    if let Ok(url) = url::Url::parse(trimmed)
        && url.has_host()
    {
        return Cow::Owned(url.path().to_string());
    }

    let path = trimmed.split(['?', '#']).next().unwrap_or_default();
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Link;

    fn menu(title: &str) -> Vec<NavItem> {
        vec![NavItem::Link(Link::new(title, "/"))]
    }

    fn table(keys: &[&str]) -> LocaleTable {
        let locales = keys.iter().map(|key| Locale::new(*key, menu(key))).collect();
        LocaleTable::from_locales(locales).unwrap()
    }

    fn resolved_key<'a>(table: &'a LocaleTable, path: &str) -> &'a str {
        resolve_locale(table, path).key()
    }

    #[test]
    fn test_root_and_empty_use_default() {
        let table = table(&["default", "zh"]);
        assert_eq!(resolved_key(&table, ""), "default");
        assert_eq!(resolved_key(&table, "/"), "default");
        assert_eq!(resolved_key(&table, "/guide/"), "default");
    }

    #[test]
    fn test_locale_prefix() {
        let table = table(&["default", "zh"]);
        assert_eq!(resolved_key(&table, "/zh/"), "zh");
        assert_eq!(resolved_key(&table, "/zh/manual"), "zh");
        assert_eq!(resolved_key(&table, "/zh"), "zh");
        assert_eq!(resolved_key(&table, "zh/manual"), "zh");
        // not a path segment match
        assert_eq!(resolved_key(&table, "/zhx/"), "default");
    }

    #[test]
    fn test_same_object_for_same_locale() {
        let table = table(&["default", "zh"]);
        let a = resolve(&table, "/zh/anything");
        let b = resolve(&table, "/zh/");
        assert!(std::ptr::eq(a, b));
        assert_eq!(a[0].title(), "zh");
    }

    #[test]
    fn test_query_fragment_and_full_url() {
        let table = table(&["default", "zh"]);
        assert_eq!(resolved_key(&table, "/zh/?q=1"), "zh");
        assert_eq!(resolved_key(&table, "/zh#top"), "zh");
        assert_eq!(resolved_key(&table, "https://tboox.org/zh/manual"), "zh");
        assert_eq!(resolved_key(&table, "https://tboox.org/"), "default");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = table(&["default", "zh", "zh/tw"]);
        assert_eq!(resolved_key(&table, "/zh/tw/intro"), "zh/tw");
        assert_eq!(resolved_key(&table, "/zh/intro"), "zh");

        let table = self::table(&["default", "zh/tw", "zh"]);
        assert_eq!(resolved_key(&table, "/zh/tw/intro"), "zh/tw");
    }

    #[test]
    fn test_tie_keeps_first_declared() {
        // `zh` and `/zh/` normalize to the same prefix
        let table = table(&["default", "zh", "/zh/"]);
        assert_eq!(resolved_key(&table, "/zh/intro"), "zh");
    }

    #[test]
    fn test_default_key_never_a_prefix() {
        let table = table(&["default", "zh"]);
        assert_eq!(resolved_key(&table, "/default/"), "default");
        assert!(resolve_locale(&table, "/default/x").is_default());
    }

    #[test]
    fn test_table_shorthand() {
        let table = table(&["default", "zh"]);
        assert!(std::ptr::eq(table.resolve("/zh/x"), resolve(&table, "/zh/")));
    }
}
