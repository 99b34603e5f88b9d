//! Product field extraction
//!
//! One product page in, one [`Product`] record out, never an error. Fields
//! are populated by an ordered chain of fill-if-empty strategies: structured
//! data, then heading/meta title fallback, then text-blob heuristics, then
//! price meta tags. Image extraction runs last and is the single step allowed
//! to overwrite an earlier value, because the gallery walk is more complete
//! than the structured-data image list.

mod images;
mod json_ld;
mod meta;
mod text;

pub use images::extract_product_images;
pub use json_ld::product_json_ld;
pub use meta::find_meta;
pub use text::{infer_colors, infer_material, infer_sizes, page_text_blob};

use crate::config::FetchConfig;
use crate::crawler::fetch_html;
use crate::product::{fill, join_values, Product};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Fetches and extracts one product page
///
/// A failed fetch returns immediately with only the URL and a fetch-failure
/// note; no extraction runs.
pub async fn extract_product(client: &Client, url: &str, fetch: &FetchConfig) -> Product {
    let Some(body) = fetch_html(client, url, fetch).await else {
        return Product::fetch_failed(url);
    };
    extract_from_html(url, &body)
}

/// Runs the extraction chain over an already-fetched page body
pub fn extract_from_html(url: &str, body: &str) -> Product {
    let mut product = Product::new(url);

    let Ok(base) = Url::parse(url) else {
        product.note = Some("source URL could not be parsed".to_string());
        return product;
    };

    let document = Html::parse_document(body);

    apply_structured_data(&document, &base, &mut product);
    apply_title_fallback(&document, &mut product);
    apply_text_heuristics(&document, &mut product);
    apply_price_meta(&document, &mut product);
    apply_images(&document, &base, &mut product);

    if product.is_empty() {
        product.note = Some("no extractable fields; page may be JavaScript-rendered".to_string());
    }

    product
}

/// Step 1: JSON-LD Product block, the authoritative source
fn apply_structured_data(document: &Html, base: &Url, product: &mut Product) {
    let Some(data) = json_ld::product_json_ld(document) else {
        return;
    };

    fill(&mut product.title, json_ld::string_value(data.get("name")));
    fill(&mut product.brand, json_ld::brand_name(data.get("brand")));

    if let Some(serde_json::Value::Object(offers)) = data.get("offers") {
        fill(&mut product.price, json_ld::string_value(offers.get("price")));
        fill(
            &mut product.currency,
            json_ld::string_value(offers.get("priceCurrency")),
        );
    }

    fill(&mut product.sku, json_ld::string_value(data.get("sku")));
    fill(&mut product.colors, json_ld::string_value(data.get("color")));
    fill(&mut product.sizes, json_ld::string_value(data.get("size")));
    fill(
        &mut product.material,
        json_ld::string_value(data.get("material")),
    );
    fill(
        &mut product.image_urls,
        join_values(json_ld::image_urls(data.get("image"), base)),
    );
}

/// Step 2: first h1, else first h2, else title meta tags
fn apply_title_fallback(document: &Html, product: &mut Product) {
    if product.title.is_some() {
        return;
    }

    let heading = ["h1", "h2"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        document.select(&selector).next()
    });
    let heading_text = heading.map(|el| el.text().collect::<String>().trim().to_string());

    fill(&mut product.title, heading_text);
    fill(
        &mut product.title,
        find_meta(document, &["og:title", "twitter:title"]),
    );
}

/// Step 3: color/size/material inference over the page text blob
fn apply_text_heuristics(document: &Html, product: &mut Product) {
    if product.colors.is_some() && product.sizes.is_some() && product.material.is_some() {
        return;
    }

    let blob = page_text_blob(document);

    fill(&mut product.colors, infer_colors(&blob));
    fill(&mut product.sizes, infer_sizes(&blob));

    if product.material.is_none() {
        let (material, ratio) = infer_material(&blob);
        fill(&mut product.material, material);
        fill(&mut product.material_ratio, ratio);
    }
}

/// Step 4: price/currency meta tags, only when still unset
fn apply_price_meta(document: &Html, product: &mut Product) {
    fill(
        &mut product.price,
        find_meta(document, &["product:price:amount", "og:price:amount"]),
    );
    fill(
        &mut product.currency,
        find_meta(document, &["product:price:currency", "og:price:currency"]),
    );
}

/// Step 5: gallery extraction, authoritative over the structured image list
fn apply_images(document: &Html, base: &Url, product: &mut Product) {
    let images = extract_product_images(document, base);
    if !images.is_empty() {
        product.image_urls = join_values(images);
    }
}
