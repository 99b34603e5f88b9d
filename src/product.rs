//! The extracted product record
//!
//! A [`Product`] is created at the start of a per-URL extraction and filled in
//! a fixed precedence order: structured data first, then meta tags, then
//! DOM/text heuristics. Once a field is set by an earlier (more authoritative)
//! step it is never overwritten by a later one; [`fill`] is the single place
//! that enforces this. The one exception is `image_urls`, where the gallery
//! walk is considered more complete than the structured-data image list and
//! overwrites it when it finds anything.

use serde::Serialize;

/// Separator used when joining multi-valued fields for tabular export
pub const MULTI_VALUE_SEP: &str = "; ";

/// One extracted catalog item
///
/// `url` is the identity key and is always populated; every other field is
/// optional. `note` carries a diagnostic when the page could not be fetched or
/// yielded no usable fields.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub url: String,
    pub title: Option<String>,
    pub colors: Option<String>,
    pub sizes: Option<String>,
    pub material: Option<String>,
    pub material_ratio: Option<String>,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub sku: Option<String>,
    pub brand: Option<String>,
    pub image_urls: Option<String>,
    pub note: Option<String>,
}

impl Product {
    /// Creates an empty record for the given source URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            colors: None,
            sizes: None,
            material: None,
            material_ratio: None,
            price: None,
            currency: None,
            sku: None,
            brand: None,
            image_urls: None,
            note: None,
        }
    }

    /// Creates a record for a URL whose page body could not be retrieved
    pub fn fetch_failed(url: impl Into<String>) -> Self {
        let mut product = Self::new(url);
        product.note = Some("could not fetch page body".to_string());
        product
    }

    /// True if no content field was extracted
    ///
    /// Drives the JS-rendered-content diagnostic: a fetched page that yields
    /// neither title, price, material, colors nor sizes is most likely
    /// assembled client-side.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.material.is_none()
            && self.colors.is_none()
            && self.sizes.is_none()
    }
}

/// Sets `slot` from `value` only if `slot` is still empty
///
/// Empty and whitespace-only values never fill a slot.
pub fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_some() {
        return;
    }
    if let Some(v) = value {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            *slot = Some(trimmed.to_string());
        }
    }
}

/// Joins non-empty parts with the export separator, first-seen order, deduped
pub fn join_values<I, S>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    for part in parts {
        let p = part.as_ref().trim();
        if !p.is_empty() && !seen.iter().any(|s| s == p) {
            seen.push(p.to_string());
        }
    }
    if seen.is_empty() {
        None
    } else {
        Some(seen.join(MULTI_VALUE_SEP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_sets_empty_slot() {
        let mut slot = None;
        fill(&mut slot, Some("Blue Rug".to_string()));
        assert_eq!(slot, Some("Blue Rug".to_string()));
    }

    #[test]
    fn test_fill_never_overwrites() {
        let mut slot = Some("199.90".to_string());
        fill(&mut slot, Some("149.90".to_string()));
        assert_eq!(slot, Some("199.90".to_string()));
    }

    #[test]
    fn test_fill_ignores_blank_values() {
        let mut slot = None;
        fill(&mut slot, Some("   ".to_string()));
        assert_eq!(slot, None);
        fill(&mut slot, None);
        assert_eq!(slot, None);
    }

    #[test]
    fn test_fill_trims() {
        let mut slot = None;
        fill(&mut slot, Some("  Cotton  ".to_string()));
        assert_eq!(slot, Some("Cotton".to_string()));
    }

    #[test]
    fn test_join_values_dedupes_in_order() {
        let joined = join_values(["red", "blue", "red", "", "green"]);
        assert_eq!(joined, Some("red; blue; green".to_string()));
    }

    #[test]
    fn test_join_values_empty() {
        assert_eq!(join_values(Vec::<String>::new()), None);
        assert_eq!(join_values(["", "  "]), None);
    }

    #[test]
    fn test_fetch_failed_has_note() {
        let product = Product::fetch_failed("https://example.com/p/1");
        assert!(product.note.is_some());
        assert!(product.is_empty());
    }

    #[test]
    fn test_is_empty_considers_content_fields_only() {
        let mut product = Product::new("https://example.com/p/1");
        product.sku = Some("SKU-1".to_string());
        assert!(product.is_empty());
        product.title = Some("Item".to_string());
        assert!(!product.is_empty());
    }
}
