//! Scoped link discovery
//!
//! Category listings bury product links between navigation chrome. This
//! module first builds an exclusion set of header/footer/nav regions (matched
//! by tag and by id/class attribute substring), then collects anchors only
//! from "content-shaped" scopes whose ancestor chain never passes through an
//! excluded node. Exclusion uses DOM node identity (`NodeId`), not value
//! equality, so duplicate markup cannot alias distinct regions.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Regions whose links are never content
const EXCLUDE_REGION_SELECTORS: &[&str] = &[
    "header",
    "footer",
    "nav",
    "div[id*='header']",
    "div[class*='header']",
    "div[id*='footer']",
    "div[class*='footer']",
];

/// Ordered scope selectors approximating "main content / product listing"
const CONTENT_SCOPES: &[&str] = &[
    "main a",
    "div[id*='main'] a",
    "div[class*='main'] a",
    "div[id*='content'] a",
    "div[class*='content'] a",
    "div[class*='listing'] a",
    "div[class*='grid'] a",
    "div[class*='product'] a",
    "section[class*='product'] a",
    "ul[class*='product'] a",
    "ol[class*='product'] a",
    "div[class*='catalog'] a",
    "div[class*='collection'] a",
];

/// Collects content-region hyperlinks as absolute URLs
///
/// Results follow scope order, then in-scope document order. Duplicates across
/// scopes are preserved here; deduplication happens downstream in the link
/// filter. Relative hrefs are resolved against `page_url`.
pub fn scoped_links(document: &Html, page_url: &Url) -> Vec<String> {
    let excluded = excluded_nodes(document);
    let mut links = Vec::new();

    for scope in CONTENT_SCOPES {
        let Ok(selector) = Selector::parse(scope) else {
            continue;
        };
        for anchor in document.select(&selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if inside_excluded(&anchor, &excluded) {
                continue;
            }
            if let Ok(resolved) = page_url.join(href) {
                links.push(resolved.to_string());
            }
        }
    }

    links
}

/// Builds the identity set of excluded region nodes
fn excluded_nodes(document: &Html) -> HashSet<NodeId> {
    let mut excluded = HashSet::new();
    for region in EXCLUDE_REGION_SELECTORS {
        if let Ok(selector) = Selector::parse(region) {
            for node in document.select(&selector) {
                excluded.insert(node.id());
            }
        }
    }
    excluded
}

/// Walks the ancestor chain checking for excluded nodes or chrome tags
fn inside_excluded(anchor: &ElementRef, excluded: &HashSet<NodeId>) -> bool {
    for ancestor in anchor.ancestors() {
        if excluded.contains(&ancestor.id()) {
            return true;
        }
        if let Some(element) = ancestor.value().as_element() {
            if matches!(element.name(), "header" | "footer" | "nav") {
                return true;
            }
        }
    }
    false
}
