//! Catcher: a product catalog scraper for irregular e-commerce markup
//!
//! This crate discovers product URLs from category listings and extracts
//! structured product records (title, price, material, colors, sizes, images)
//! from pages that carry little or no reliable structured markup. JSON-LD
//! product data is preferred where present; textual and DOM heuristics fill
//! in the rest.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod product;
pub mod scrape;
pub mod url;

use thiserror::Error;

/// Main error type for catcher operations
///
/// Per-URL fetch and extraction failures never surface here: they degrade
/// into absent bodies or noted [`product::Product`] records. This type covers
/// the setup and output boundaries only.
#[derive(Debug, Error)]
pub enum CatcherError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for catcher operations
pub type Result<T> = std::result::Result<T, CatcherError>;

// Re-export the boundary types and entry points
pub use config::{Config, CrawlFilter, FetchConfig};
pub use crawler::{build_http_client, collect_category_links, fetch_html};
pub use product::Product;
pub use scrape::scrape_all;
