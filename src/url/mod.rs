//! URL classification and filtering
//!
//! This module decides which discovered links are worth scraping: it keeps
//! links on the category page's own host, applies operator include/exclude
//! substrings, and falls back to a path-shape heuristic for telling product
//! pages apart from navigation noise.

use crate::config::{CrawlFilter, MAX_URL_LIST};
use std::path::Path;
use url::Url;

/// Path markers that strongly suggest a product or catalog URL
const PRODUCT_PATH_HINTS: &[&str] = &[
    "/urun/",
    "/product",
    "/products/",
    "/p-",
    "/item/",
    "/detail",
    "/detay",
    "/shop/",
    "/collections/",
    "/collection/",
    "/catalog/",
    "/kategori/",
    "/category/",
];

/// Extracts the lowercased host of a URL, or None if it cannot be parsed
pub fn domain_from(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
}

/// Heuristic: does this URL look like a product page?
///
/// True when the path contains a known product/catalog marker, or when the
/// last non-empty path segment is at least 6 characters and carries a hyphen
/// or a digit (slug-shaped). Navigation links ("/about", "/cart") fail both.
pub fn looks_like_product_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let path = parsed.path().to_lowercase();

    if PRODUCT_PATH_HINTS.iter().any(|hint| path.contains(hint)) {
        return true;
    }

    if let Some(last) = path.split('/').filter(|s| !s.is_empty()).last() {
        if last.len() >= 6 && (last.contains('-') || last.chars().any(|c| c.is_ascii_digit())) {
            return true;
        }
    }

    false
}

/// Splits an operator filter string on `;`, dropping blanks
///
/// `"/sale/; /new/"` becomes `["/sale/", "/new/"]`.
pub fn parse_filters(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the explicit product URL list for list-mode scraping
///
/// Positional URLs come first, then lines from the optional input file with
/// blanks and `#` comment lines skipped. The combined list is truncated to
/// the URL-list cap.
pub fn gather_url_list(mut urls: Vec<String>, input: Option<&Path>) -> crate::Result<Vec<String>> {
    if let Some(path) = input {
        let body = std::fs::read_to_string(path)?;
        urls.extend(
            body.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }

    if urls.len() > MAX_URL_LIST {
        tracing::warn!(
            given = urls.len(),
            kept = MAX_URL_LIST,
            "URL list over the limit, truncating"
        );
        urls.truncate(MAX_URL_LIST);
    }

    Ok(urls)
}

/// Filters candidate links down to likely product URLs, order-preserving
///
/// Applied per link, in order:
/// 1. drop links whose host differs from `host`
/// 2. drop links matching any exclude substring (exclude beats include)
/// 3. if include substrings are configured, keep only matching links,
///    bypassing the product-URL heuristic entirely
/// 4. otherwise keep only links passing [`looks_like_product_url`]
///
/// The result keeps first-seen order and contains no duplicate URL.
pub fn filter_links(links: &[String], host: &str, filter: &CrawlFilter) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();

    for link in links {
        if domain_from(link).as_deref() != Some(host) {
            continue;
        }
        if filter.exclude.iter().any(|s| link.contains(s)) {
            continue;
        }
        if !filter.include.is_empty() {
            if !filter.include.iter().any(|s| link.contains(s)) {
                continue;
            }
        } else if !looks_like_product_url(link) {
            continue;
        }
        if !kept.iter().any(|k| k == link) {
            kept.push(link.clone());
        }
    }

    kept
}
