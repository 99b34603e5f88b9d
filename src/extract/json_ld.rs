//! Structured product data (JSON-LD)
//!
//! Locates `script` blocks carrying `ld+json` payloads and returns the first
//! well-formed object whose `@type` declares a Product, searching top-level
//! objects, arrays, and `@graph` containers. Malformed blocks are skipped
//! silently; extraction falls through to the DOM heuristics.

use scraper::{Html, Selector};
use serde_json::{Map, Value};
use url::Url;

/// Returns the first well-formed Product object in the document, if any
pub fn product_json_ld(document: &Html) -> Option<Map<String, Value>> {
    let selector = Selector::parse("script[type*='ld+json']").ok()?;

    for script in document.select(&selector) {
        let raw = script.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            continue;
        };
        if let Some(product) = find_product(&value) {
            return Some(product.clone());
        }
    }

    None
}

fn find_product(value: &Value) -> Option<&Map<String, Value>> {
    match value {
        Value::Object(map) => {
            if is_product_type(map.get("@type")) {
                return Some(map);
            }
            map.get("@graph").and_then(find_product)
        }
        Value::Array(items) => items.iter().find_map(find_product),
        _ => None,
    }
}

/// `@type` may be a string or a list of strings
fn is_product_type(type_value: Option<&Value>) -> bool {
    match type_value {
        Some(Value::String(s)) => s == "Product",
        Some(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some("Product")),
        _ => false,
    }
}

/// Converts a JSON-LD field into display text
///
/// Strings are trimmed, numbers rendered as-is (prices are often numeric),
/// and lists joined with the export separator.
pub fn string_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => crate::product::join_values(
            items
                .iter()
                .filter_map(|item| string_value(Some(item)))
                .collect::<Vec<_>>(),
        ),
        _ => None,
    }
}

/// Brand may be a flat string or a nested object with a `name`
pub fn brand_name(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Object(map) => string_value(map.get("name")),
        other => string_value(Some(other)),
    }
}

/// Resolves the `image` field into absolute URLs
///
/// Handles a single string, a list of strings, and a list of objects carrying
/// a `url` member.
pub fn image_urls(value: Option<&Value>, base: &Url) -> Vec<String> {
    let mut urls = Vec::new();
    let Some(value) = value else {
        return urls;
    };

    let items: Vec<&Value> = match value {
        Value::Array(list) => list.iter().collect(),
        single => vec![single],
    };

    for item in items {
        let raw = match item {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map.get("url").and_then(Value::as_str),
            _ => None,
        };
        if let Some(raw) = raw {
            if let Ok(resolved) = base.join(raw) {
                urls.push(resolved.to_string());
            }
        }
    }

    urls
}
