//! `check` command.

use anyhow::Result;
use std::path::Path;
use tola_nav::config::DropdownItems;
use tola_nav::{ConfigDocument, NavItem, debug, log};

/// Load the config and summarize it. Validation failures propagate with
/// the full diagnostics list.
pub fn check_config(path: &Path) -> Result<()> {
    let doc = ConfigDocument::from_path(path)?;

    for locale in doc.locales().iter() {
        let shared = locale
            .items()
            .iter()
            .filter_map(NavItem::as_dropdown)
            .filter(|d| matches!(d.items, DropdownItems::Shared(_)))
            .count();
        debug!(
            "check";
            "{}: {}, {} shared",
            locale.key(),
            plural_count(locale.items().len(), "item"),
            plural_count(shared, "dropdown")
        );
    }

    log!(
        "check";
        "{} ok: {}, {}, {}",
        path.display(),
        plural_count(doc.locales().len(), "locale"),
        plural_count(doc.lists().len(), "shared list"),
        plural_count(doc.plugins().len(), "plugin")
    );
    Ok(())
}

/// Format count with noun, handling pluralization
fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
