//! Text-blob heuristics for color, size, and material
//!
//! These run over the concatenated text of paragraph/list/table-cell/div
//! elements when structured data left a field empty. The vocabularies are
//! bilingual (Turkish/English) because the target catalogs mix both.

use crate::product::join_values;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Fabric names, Turkish then English
pub const MATERIAL_DICT: &[&str] = &[
    "pamuk", "keten", "bambu", "viskon", "polyester", "ipek", "şifon", "saten", "modal",
    "akrilik", "naylon", "elastan", "likra", "kaşmir", "yün", "tencel", "rayon", "cotton",
    "linen", "bamboo", "viscose", "silk", "chiffon", "satin", "acrylic", "nylon", "elastane",
    "spandex", "cashmere", "wool", "lyocell",
];

/// Tokens marking a line as color-related
pub const COLOR_HINTS: &[&str] = &[
    "renk", "color", "colours", "colors", "tone", "ton", "shade", "hue",
];

/// Tokens marking a line as size-related
pub const SIZE_HINTS: &[&str] = &[
    "boyut", "ölçü", "size", "dimension", "uzunluk", "eni", "cm", "mm",
];

static DIMENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{2,3})\s*[x×]\s*(\d{2,3})\b").expect("DIMENSION_RE regex")
});

static RATIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\s*(\d{1,3})").expect("RATIO_RE regex"));

/// Concatenates the page's paragraph/list/cell/div text, one line per element
pub fn page_text_blob(document: &Html) -> String {
    let Ok(selector) = Selector::parse("p, li, td, div") else {
        return String::new();
    };

    let mut lines: Vec<String> = Vec::new();
    for element in document.select(&selector) {
        let text = element
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !text.is_empty() {
            lines.push(text);
        }
    }
    lines.join("\n")
}

/// Collects lines mentioning a color vocabulary token
pub fn infer_colors(text: &str) -> Option<String> {
    let hits = text
        .split(['\n', '\r', '.', '-', '•'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let low = line.to_lowercase();
            COLOR_HINTS.iter().any(|hint| low.contains(hint))
        });
    join_values(hits)
}

/// Collects size-related lines and NNxNN dimension patterns
pub fn infer_sizes(text: &str) -> Option<String> {
    let mut hits: Vec<String> = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let low = line.to_lowercase();
            SIZE_HINTS.iter().any(|hint| low.contains(hint))
        })
        .map(str::to_string)
        .collect();

    for captures in DIMENSION_RE.captures_iter(&text.to_lowercase()) {
        hits.push(format!("{}x{}", &captures[1], &captures[2]));
    }

    join_values(hits)
}

/// Detects materials and composition ratios
///
/// Materials are substring matches against the bilingual vocabulary; ratios
/// are any `%NN` tokens in the raw text, rendered as a `%`-prefixed list.
pub fn infer_material(text: &str) -> (Option<String>, Option<String>) {
    let low = text.to_lowercase();

    let mut materials: Vec<&str> = Vec::new();
    for material in MATERIAL_DICT {
        if low.contains(material) && !materials.contains(material) {
            materials.push(material);
        }
    }
    let material = (!materials.is_empty()).then(|| materials.join(", "));

    let ratios: Vec<String> = RATIO_RE
        .captures_iter(text)
        .map(|c| format!("%{}", &c[1]))
        .collect();
    let ratio = (!ratios.is_empty()).then(|| ratios.join(", "));

    (material, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_colors_matches_hint_lines() {
        let text = "Renk: Mavi\nYıkama talimatı\nAvailable colors: red, blue";
        let colors = infer_colors(text).unwrap();
        assert!(colors.contains("Renk: Mavi"));
        assert!(colors.contains("Available colors: red, blue"));
        assert!(!colors.contains("Yıkama"));
    }

    #[test]
    fn test_infer_colors_none_without_hints() {
        assert_eq!(infer_colors("Yıkama talimatı\nKargo bilgisi"), None);
    }

    #[test]
    fn test_infer_sizes_dimension_pattern() {
        let sizes = infer_sizes("Harika bir halı, 60 x 90 cm ebadında").unwrap();
        assert!(sizes.contains("60x90"));
    }

    #[test]
    fn test_infer_sizes_unicode_times() {
        let sizes = infer_sizes("120×180 ölçüsünde").unwrap();
        assert!(sizes.contains("120x180"));
    }

    #[test]
    fn test_infer_sizes_hint_lines() {
        let sizes = infer_sizes("Boyut: Büyük\nRenk: Mavi").unwrap();
        assert!(sizes.contains("Boyut: Büyük"));
        assert!(!sizes.contains("Renk"));
    }

    #[test]
    fn test_infer_sizes_ignores_long_numbers() {
        // four-digit numbers are not plausible cm dimensions
        assert_eq!(infer_sizes("Model 1200x1800 paneli"), None);
    }

    #[test]
    fn test_infer_material_bilingual() {
        let (material, ratio) = infer_material("İçerik: %80 pamuk, %20 polyester blend (Cotton)");
        let material = material.unwrap();
        assert!(material.contains("pamuk"));
        assert!(material.contains("polyester"));
        assert!(material.contains("cotton"));
        assert_eq!(ratio, Some("%80, %20".to_string()));
    }

    #[test]
    fn test_infer_material_nothing() {
        let (material, ratio) = infer_material("Hızlı kargo, kolay iade");
        assert_eq!(material, None);
        assert_eq!(ratio, None);
    }

    #[test]
    fn test_page_text_blob_collects_block_text() {
        let document = Html::parse_document(
            r#"<html><body>
                <p>Renk: Mavi</p>
                <ul><li>60 x 90 cm</li></ul>
                <table><tr><td>%100 pamuk</td></tr></table>
            </body></html>"#,
        );
        let blob = page_text_blob(&document);
        assert!(blob.contains("Renk: Mavi"));
        assert!(blob.contains("60 x 90 cm"));
        assert!(blob.contains("%100 pamuk"));
    }
}
