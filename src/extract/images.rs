//! Product image extraction
//!
//! Accumulates image URLs from three sources in priority order: the
//! structured-data image list, then DOM gallery containers, then (only when
//! nothing was found) every non-excluded `<img>` on the page. Swatches,
//! variant thumbnails, icons and logos are filtered out by class and alt-text
//! vocabularies. The result is deduplicated in first-seen order and capped.

use crate::extract::json_ld;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Hard cap on the accumulated image list
const MAX_IMAGES: usize = 30;

/// Anything shorter cannot be a plausible image URL
const MIN_URL_LEN: usize = 6;

/// Class substrings marking non-gallery imagery
const EXCLUDE_CLASSES: &[&str] = &[
    "swatch",
    "variant",
    "varian",
    "renk",
    "color",
    "option",
    "attribute",
    "thumb-variant",
    "icon",
    "logo",
    "avatar",
    "badge",
    "placeholder",
];

/// Alt-text substrings marking swatches, variants, and branding
const EXCLUDE_ALT_HINTS: &[&str] = &["swatch", "variant", "renk", "color", "logo", "icon"];

/// Lazy-load and large-image attributes, tried before the plain source
const SRC_ATTRS: &[&str] = &["data-src", "data-large_image", "src"];

static PRODUCT_CTX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"product|urun").expect("PRODUCT_CTX_RE regex"));

static GALLERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"gallery|media|images|slider|carousel|thumbs|zoom|fotorama|swiper")
        .expect("GALLERY_RE regex")
});

/// Extracts the product's image URLs, deduplicated, capped at 30
pub fn extract_product_images(document: &Html, base: &Url) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();

    if let Some(data) = json_ld::product_json_ld(document) {
        urls.extend(json_ld::image_urls(data.get("image"), base));
    }

    if let Ok(img_selector) = Selector::parse("img") {
        for gallery in gallery_containers(document) {
            for img in gallery.select(&img_selector) {
                if let Some(url) = usable_image_url(&img, base) {
                    urls.push(url);
                }
            }
        }

        // Page-wide fallback only when neither source produced anything
        if urls.is_empty() {
            for img in document.select(&img_selector) {
                if let Some(url) = usable_image_url(&img, base) {
                    urls.push(url);
                }
            }
        }
    }

    let mut unique: Vec<String> = Vec::new();
    for url in urls {
        if !unique.contains(&url) {
            unique.push(url);
        }
    }
    unique.truncate(MAX_IMAGES);
    unique
}

/// Containers whose id/class names both a product context and a gallery role
fn gallery_containers(document: &Html) -> Vec<ElementRef<'_>> {
    let Ok(selector) = Selector::parse("div, section, ul, ol") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter(|container| {
            let id = container.value().attr("id").unwrap_or("").to_lowercase();
            let class = container.value().attr("class").unwrap_or("").to_lowercase();
            let combined = format!("{} {}", id, class);
            PRODUCT_CTX_RE.is_match(&combined)
                && GALLERY_RE.is_match(&combined)
                && !is_excluded_by_class(container)
        })
        .collect()
}

/// Resolves one `<img>` to an absolute URL, or rejects it
fn usable_image_url(img: &ElementRef, base: &Url) -> Option<String> {
    if is_excluded_by_class(img) {
        return None;
    }

    let alt = img.value().attr("alt").unwrap_or("").to_lowercase();
    if EXCLUDE_ALT_HINTS.iter().any(|hint| alt.contains(hint)) {
        return None;
    }

    let src = SRC_ATTRS
        .iter()
        .find_map(|attr| img.value().attr(attr).filter(|v| !v.trim().is_empty()))?;

    let resolved = base.join(src).ok()?.to_string();
    (resolved.len() >= MIN_URL_LEN).then_some(resolved)
}

fn is_excluded_by_class(element: &ElementRef) -> bool {
    element
        .value()
        .attr("class")
        .map(|class| {
            let low = class.to_lowercase();
            EXCLUDE_CLASSES.iter().any(|excluded| low.contains(excluded))
        })
        .unwrap_or(false)
}
