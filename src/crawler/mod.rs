//! Category crawling
//!
//! This module walks a paginated category listing and accumulates product
//! URLs: fetch a page, collect content-scoped links, filter them down to
//! product URLs, then resolve the next page and repeat. The loop is bounded
//! by the operator's page and product caps and terminates early (keeping
//! partial results) when a page cannot be fetched.

mod fetcher;
mod pagination;
mod scope;

pub use fetcher::{build_http_client, fetch_html, ACCEPT_LANGUAGE, USER_AGENT};
pub use pagination::{bump_page_param, next_page};
pub use scope::scoped_links;

use crate::config::{CrawlFilter, FetchConfig};
use crate::url::{domain_from, filter_links};
use reqwest::Client;
use scraper::Html;
use std::collections::HashSet;
use url::Url;

/// Walks a category listing and returns the deduplicated, ordered product URLs
///
/// Traversal is strictly sequential and order-preserving: page visitation
/// follows the pagination chain and links accumulate in first-seen order. The
/// result never exceeds `filter.max_products`, never visits more than
/// `filter.max_pages` pages, and contains no duplicate URL. A fetch failure
/// ends the walk; whatever was accumulated so far is returned.
pub async fn collect_category_links(
    client: &Client,
    category_url: &str,
    filter: &CrawlFilter,
    fetch: &FetchConfig,
) -> Vec<String> {
    let Some(host) = domain_from(category_url) else {
        tracing::warn!("Category URL is not parseable: {}", category_url);
        return Vec::new();
    };
    let Ok(mut page_url) = Url::parse(category_url) else {
        return Vec::new();
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<String> = Vec::new();
    let mut pages_visited = 0usize;

    while pages_visited < filter.max_pages && results.len() < filter.max_products {
        let Some(body) = fetch_html(client, page_url.as_str(), fetch).await else {
            tracing::warn!("Listing page fetch failed, stopping at {}", page_url);
            break;
        };

        // The DOM stays inside this synchronous call; only owned strings
        // cross back over the await boundary.
        let next = process_listing(&body, &page_url, &host, filter, &mut seen, &mut results);
        pages_visited += 1;

        tracing::info!(
            "Visited {} ({} pages, {} product links)",
            page_url,
            pages_visited,
            results.len()
        );

        match next {
            Some(next_url) => page_url = next_url,
            None => break,
        }
    }

    results.truncate(filter.max_products);
    results
}

/// Parses one listing page, accumulates its product links, resolves the next page
///
/// Returns None when the product cap was reached (next-page resolution is
/// skipped entirely) or when the page offers no further pagination signal.
fn process_listing(
    body: &str,
    page_url: &Url,
    host: &str,
    filter: &CrawlFilter,
    seen: &mut HashSet<String>,
    results: &mut Vec<String>,
) -> Option<Url> {
    let document = Html::parse_document(body);

    let links = scoped_links(&document, page_url);
    let kept = filter_links(&links, host, filter);

    for url in kept {
        if seen.contains(&url) {
            continue;
        }
        seen.insert(url.clone());
        results.push(url);
        if results.len() >= filter.max_products {
            return None;
        }
    }

    next_page(&document, page_url)
}
