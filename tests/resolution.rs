//! End-to-end loading and resolution of navigation configs.

use std::sync::Arc;
use tola_nav::config::raw::{RawDocument, RawItems, RawNavItem};
use tola_nav::config::{DropdownItems, Link};
use tola_nav::{ConfigDocument, ErrorKind, Format, NavItem, resolve, resolve_locale};

const SITE: &str = r#"{
  "landing": true,
  "repo": "tboox/tbox",
  "twitter": "waruqi",
  "url": "https://tboox.org",
  "edit-link": "https://github.com/tboox/tbox/edit/master/docs",
  "lists": {
    "langs": [
      {"title": "English", "path": "/home"},
      {"title": "中文", "path": "/zh/"}
    ]
  },
  "nav": {
    "default": [
      {"title": "Home", "path": "/home"},
      {"title": "English", "type": "dropdown", "items": "langs", "exact": true}
    ],
    "zh": [
      {"title": "首页", "path": "/zh/"},
      {"title": "中文", "type": "dropdown", "items": "langs", "exact": true}
    ]
  },
  "plugins": [
    {"name": "docsearch", "apiKey": "", "indexName": "tbox", "tags": ["en", "zh"]}
  ]
}"#;

fn site() -> ConfigDocument {
    ConfigDocument::from_str(SITE, Format::Json).unwrap()
}

fn shared_links(item: &NavItem) -> &[Link] {
    item.as_dropdown().unwrap().links()
}

#[test]
fn loads_and_resolves_zh_manual() {
    let doc = site();
    assert!(doc.landing());

    let locale = resolve_locale(doc.locales(), "/zh/manual");
    assert_eq!(locale.key(), "zh");

    let items = locale.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title(), "首页");
    let links = shared_links(&items[1]);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0], Link::new("English", "/home"));
    assert_eq!(links[1], Link::new("中文", "/zh/"));
    assert!(items[1].exact());
}

#[test]
fn prefix_match_is_stable() {
    let doc = site();
    let a = resolve(doc.locales(), "/zh/anything");
    let b = resolve(doc.locales(), "/zh/");
    assert!(std::ptr::eq(a, b));

    let root = resolve(doc.locales(), "/");
    assert!(std::ptr::eq(root, doc.locales().default_locale().items()));
    assert!(std::ptr::eq(root, resolve(doc.locales(), "")));
}

#[test]
fn shared_list_is_aliased_not_copied() {
    let doc = site();
    let en = doc.locales().get("default").unwrap().items()[1].as_dropdown().unwrap();
    let zh = doc.locales().get("zh").unwrap().items()[1].as_dropdown().unwrap();

    let (DropdownItems::Shared(en_list), DropdownItems::Shared(zh_list)) = (&en.items, &zh.items)
    else {
        panic!("expected shared lists");
    };
    assert!(en_list.ptr_eq(zh_list));
    assert!(en_list.ptr_eq(doc.lists().get("langs").unwrap()));
    assert!(std::ptr::eq(en.links(), zh.links()));
}

#[test]
fn missing_default_fails_alone() {
    let json = r#"{"nav": {"zh": [{"title": "首页", "path": "/zh/"}]}}"#;
    let err = ConfigDocument::from_str(json, Format::Json).unwrap_err();
    let diag = err.diagnostics().unwrap();
    assert_eq!(diag.len(), 1);
    assert_eq!(diag.errors()[0].kind(), ErrorKind::MissingDefaultLocale);
}

#[test]
fn dangling_reference_batched_with_other_errors() {
    let mut raw = RawDocument::default();
    raw.nav.push(
        "default",
        vec![
            RawNavItem::link("Home", ""),
            RawNavItem::dropdown("Languages", RawItems::Shared("langs".into())),
        ],
    );
    raw.nav.push("zh", vec![RawNavItem::link("首页", "/zh/")]);
    raw.nav.push("zh", vec![]);

    let diag = ConfigDocument::load(&raw).unwrap_err();
    assert!(diag.contains(ErrorKind::DanglingDropdownReference));
    assert!(diag.contains(ErrorKind::EmptyField));
    assert!(diag.contains(ErrorKind::DuplicateLocaleKey));
    assert_eq!(diag.len(), 3);
}

#[test]
fn reserialized_document_reloads_identical() {
    let doc = site();

    let json = doc.to_json_string().unwrap();
    assert_eq!(ConfigDocument::from_str(&json, Format::Json).unwrap(), doc);

    let reloaded = ConfigDocument::load(&doc.to_raw()).unwrap();
    assert_eq!(reloaded, doc);
    // reloading builds a new document; aliasing holds within it
    let a = shared_links(&reloaded.locales().default_locale().items()[1]);
    let b = shared_links(&reloaded.locales().get("zh").unwrap().items()[1]);
    assert!(std::ptr::eq(a, b));
}

#[test]
fn plugins_validated_and_typed() {
    let doc = site();
    let search = doc.plugins()[0].docsearch().unwrap();
    assert_eq!(search.index_name, "tbox");
    assert_eq!(search.tags, ["en", "zh"]);

    let json = r#"{
      "nav": {"default": []},
      "plugins": [{"name": "docsearch", "apiKey": "", "indexName": ""}, {"name": "custom", "x": [1, 2]}]
    }"#;
    let err = ConfigDocument::from_str(json, Format::Json).unwrap_err();
    let diag = err.diagnostics().unwrap();
    assert_eq!(diag.len(), 1);
    assert_eq!(diag.errors()[0].kind(), ErrorKind::EmptyIndexName);
}

#[test]
fn handle_shares_document_across_threads() {
    let handle = Arc::new(tola_nav::ConfigHandle::new(site()));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handle = Arc::clone(&handle);
            std::thread::spawn(move || handle.load().menu_for("/zh/x")[0].title().to_string())
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), "首页");
    }
}
