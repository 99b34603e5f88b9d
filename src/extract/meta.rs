//! Meta tag lookup
//!
//! Fallback source for title and price when structured data is absent.
//! `property` attributes take precedence over `name` attributes for the same
//! key, and requested names are tried in the caller's order.

use scraper::{Html, Selector};

/// Returns the first non-empty `content` for any of the requested meta names
///
/// For each name, a `meta[property=...]` match anywhere in the document beats
/// a `meta[name=...]` match.
pub fn find_meta(document: &Html, names: &[&str]) -> Option<String> {
    let selector = Selector::parse("meta[content]").ok()?;

    // (is_property, key, content) in document order
    let mut entries: Vec<(bool, &str, &str)> = Vec::new();
    for element in document.select(&selector) {
        let Some(content) = element.value().attr("content") else {
            continue;
        };
        if let Some(property) = element.value().attr("property") {
            entries.push((true, property, content));
        } else if let Some(name) = element.value().attr("name") {
            entries.push((false, name, content));
        }
    }

    for wanted in names {
        for &(_, key, content) in entries
            .iter()
            .filter(|(is_property, _, _)| *is_property)
            .chain(entries.iter().filter(|(is_property, _, _)| !is_property))
        {
            if key == *wanted && !content.trim().is_empty() {
                return Some(content.trim().to_string());
            }
        }
    }

    None
}
