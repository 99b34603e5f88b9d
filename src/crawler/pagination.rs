//! Next-page resolution for paginated category listings
//!
//! Resolution order, first match wins:
//! 1. `<link rel=next>` or an anchor with `rel=next`
//! 2. an anchor whose trimmed, lowercased text is in the "next" vocabulary
//! 3. an anchor whose class matches a next/pagination pattern
//! 4. the first numbered-page anchor that is not the current page
//! 5. an existing `page` query parameter, incremented
//!
//! When none apply, pagination is done. Sites that paginate via path segments
//! (`/page/2/`) are not recognized; step 5 only rewrites query parameters.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Visible anchor texts meaning "next page"
const NEXT_TEXT_VOCAB: &[&str] = &["sonraki", "next", ">", "\u{bb}"];

static NEXT_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"next|sonraki|pagination__next|page-next").expect("NEXT_CLASS_RE regex")
});

/// Determines the next listing page URL, if any
pub fn next_page(document: &Html, page_url: &Url) -> Option<Url> {
    next_by_rel(document, page_url)
        .or_else(|| next_by_text(document, page_url))
        .or_else(|| next_by_class(document, page_url))
        .or_else(|| first_numbered_page(document, page_url))
        .or_else(|| bump_page_param(page_url))
}

fn next_by_rel(document: &Html, page_url: &Url) -> Option<Url> {
    for selector in ["link[rel*='next'][href]", "a[rel*='next'][href]"] {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            if let Some(href) = element.value().attr("href") {
                if let Ok(resolved) = page_url.join(href) {
                    return Some(resolved);
                }
            }
        }
    }
    None
}

fn next_by_text(document: &Html, page_url: &Url) -> Option<Url> {
    let selector = Selector::parse("a[href]").ok()?;
    for anchor in document.select(&selector) {
        let text = anchor.text().collect::<String>().trim().to_lowercase();
        if NEXT_TEXT_VOCAB.contains(&text.as_str()) {
            if let Some(href) = anchor.value().attr("href") {
                if let Ok(resolved) = page_url.join(href) {
                    return Some(resolved);
                }
            }
        }
    }
    None
}

fn next_by_class(document: &Html, page_url: &Url) -> Option<Url> {
    let selector = Selector::parse("a[href]").ok()?;
    for anchor in document.select(&selector) {
        let Some(class) = anchor.value().attr("class") else {
            continue;
        };
        if NEXT_CLASS_RE.is_match(&class.to_lowercase()) {
            if let Some(href) = anchor.value().attr("href") {
                if let Ok(resolved) = page_url.join(href) {
                    return Some(resolved);
                }
            }
        }
    }
    None
}

/// First anchor with all-digit text resolving somewhere other than here
fn first_numbered_page(document: &Html, page_url: &Url) -> Option<Url> {
    let selector = Selector::parse("a[href]").ok()?;
    for anchor in document.select(&selector) {
        let text = anchor.text().collect::<String>();
        let trimmed = text.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if let Some(href) = anchor.value().attr("href") {
            if let Ok(resolved) = page_url.join(href) {
                if resolved != *page_url {
                    return Some(resolved);
                }
            }
        }
    }
    None
}

/// Synthesizes the next URL by incrementing an existing `page` query parameter
///
/// Returns None when the URL carries no parseable `page` parameter, or when
/// the parameter is already at the numeric maximum.
pub fn bump_page_param(page_url: &Url) -> Option<Url> {
    let pairs: Vec<(String, String)> = page_url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let current: u32 = pairs
        .iter()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())?;
    let bumped = current.checked_add(1)?;

    let rewritten: Vec<(String, String)> = pairs
        .into_iter()
        .map(|(key, value)| {
            if key == "page" {
                (key, bumped.to_string())
            } else {
                (key, value)
            }
        })
        .collect();

    let mut next = page_url.clone();
    next.query_pairs_mut().clear().extend_pairs(&rewritten);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_link_rel_next_wins() {
        let document = parse(
            r#"<html><head><link rel="next" href="/list?page=2"></head>
            <body><a class="pagination-next" href="/wrong">next</a></body></html>"#,
        );
        let next = next_page(&document, &url("https://example.com/list")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/list?page=2");
    }

    #[test]
    fn test_anchor_rel_next() {
        let document = parse(r#"<html><body><a rel="next" href="/list/2">more</a></body></html>"#);
        let next = next_page(&document, &url("https://example.com/list")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/list/2");
    }

    #[test]
    fn test_next_text_vocabulary() {
        for label in ["Next", "sonraki", "»", ">"] {
            let html = format!(r#"<html><body><a href="/p2">{}</a></body></html>"#, label);
            let document = parse(&html);
            let next = next_page(&document, &url("https://example.com/list"));
            assert!(next.is_some(), "no next page for label {:?}", label);
        }
    }

    #[test]
    fn test_next_by_class_pattern() {
        let document = parse(
            r#"<html><body><a class="pagination__next btn" href="/list?page=3">&rarr;</a></body></html>"#,
        );
        let next = next_page(&document, &url("https://example.com/list?page=2")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/list?page=3");
    }

    #[test]
    fn test_numbered_anchor_skips_current_page() {
        let document = parse(
            r#"<html><body>
            <a href="/list?page=1">1</a>
            <a href="/list?page=2">2</a>
            </body></html>"#,
        );
        let next = next_page(&document, &url("https://example.com/list?page=1")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/list?page=2");
    }

    #[test]
    fn test_bump_page_param() {
        let next = bump_page_param(&url("https://example.com/list?sort=new&page=3")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/list?sort=new&page=4");
    }

    #[test]
    fn test_no_page_param_is_dead_end() {
        assert!(bump_page_param(&url("https://example.com/list")).is_none());
        assert!(bump_page_param(&url("https://example.com/list?page=abc")).is_none());
    }

    #[test]
    fn test_page_param_at_numeric_max_is_dead_end() {
        assert!(bump_page_param(&url("https://example.com/list?page=4294967295")).is_none());
        // one below the maximum still bumps
        let next = bump_page_param(&url("https://example.com/list?page=4294967294")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/list?page=4294967295");
    }

    #[test]
    fn test_no_signal_terminates() {
        let document = parse(r#"<html><body><a href="/urun/rug-1">Rug</a></body></html>"#);
        assert!(next_page(&document, &url("https://example.com/list")).is_none());
    }
}
