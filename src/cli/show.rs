//! `resolve`, `plugins` and `dump` commands: print parts of the loaded config.
//!
//! Output is written to stdout so it can be piped into other tools; logs go
//! to stderr.

use anyhow::Result;
use serde_json::{Value, json};
use tola_nav::config::{DropdownItems, Link};
use tola_nav::{ConfigDocument, Format, NavItem, log, resolve_locale};

/// Print the locale and menu serving `request_path`, shared lists expanded.
pub fn show_menu(doc: &ConfigDocument, request_path: &str) -> Result<()> {
    let locale = resolve_locale(doc.locales(), request_path);
    log!("resolve"; "{} -> {}", request_path, locale.key());

    let view = json!({
        "locale": locale.key(),
        "items": locale.items().iter().map(item_view).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

pub fn show_plugins(doc: &ConfigDocument) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(doc.plugins())?);
    Ok(())
}

pub fn dump(doc: &ConfigDocument, format: Format) -> Result<()> {
    let output = match format {
        Format::Toml => doc.to_toml_string()?,
        Format::Json => doc.to_json_string()?,
    };
    println!("{output}");
    Ok(())
}

/// Render-ready view of a menu entry.
fn item_view(item: &NavItem) -> Value {
    match item {
        NavItem::Link(link) => link_view(link),
        NavItem::Dropdown(dropdown) => {
            let shared = match &dropdown.items {
                DropdownItems::Shared(list) => Value::from(list.name()),
                DropdownItems::Inline(_) => Value::Null,
            };
            json!({
                "type": "dropdown",
                "title": dropdown.title,
                "exact": dropdown.exact,
                "shared": shared,
                "items": dropdown.links().iter().map(link_view).collect::<Vec<_>>(),
            })
        }
    }
}

fn link_view(link: &Link) -> Value {
    json!({
        "type": "link",
        "title": link.title,
        "path": link.path,
        "exact": link.exact,
        "external": link.is_external(),
    })
}
