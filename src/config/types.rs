use serde::Deserialize;
use std::time::Duration;

/// Default page-visit cap for a category crawl
pub const DEFAULT_MAX_PAGES: usize = 20;

/// Default product-count cap for a category crawl
pub const DEFAULT_MAX_PRODUCTS: usize = 1000;

/// Upper bound on an explicit product URL list
pub const MAX_URL_LIST: usize = 200;

/// Main configuration structure for catcher
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub crawl: CrawlFilter,

    #[serde(default)]
    pub scrape: ScrapeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout per attempt, in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Read timeout per attempt, in seconds
    #[serde(rename = "read-timeout-secs", default = "default_read_timeout")]
    pub read_timeout_secs: u64,

    /// Number of retries after the initial attempt
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay for linear backoff between attempts, in milliseconds
    #[serde(rename = "backoff-ms", default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

fn default_connect_timeout() -> u64 {
    6
}

fn default_read_timeout() -> u64 {
    18
}

fn default_max_retries() -> u32 {
    2
}

fn default_backoff_ms() -> u64 {
    600
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            max_retries: default_max_retries(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// Linear backoff: `backoff_ms * (attempt + 1)` for the zero-based attempt
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.backoff_ms * u64::from(attempt + 1))
    }
}

/// Operator-supplied constraints for category traversal
///
/// If `include` is non-empty a URL must contain at least one of its entries to
/// qualify, bypassing the generic product-URL heuristic. Any `exclude` match
/// rejects a URL outright; exclude takes precedence over include.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlFilter {
    /// Substrings a URL must contain (any of) to be kept
    #[serde(default)]
    pub include: Vec<String>,

    /// Substrings that reject a URL (any of)
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Maximum number of listing pages to visit
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Maximum number of product URLs to accumulate
    #[serde(rename = "max-products", default = "default_max_products")]
    pub max_products: usize,
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_max_products() -> usize {
    DEFAULT_MAX_PRODUCTS
}

impl Default for CrawlFilter {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            max_pages: DEFAULT_MAX_PAGES,
            max_products: DEFAULT_MAX_PRODUCTS,
        }
    }
}

/// Scrape orchestration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// Worker pool cap; the effective pool is min(this, number of URLs)
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,
}

fn default_max_workers() -> usize {
    12
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where export files land
    #[serde(rename = "out-dir", default = "default_out_dir")]
    pub out_dir: String,

    /// Export format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_out_dir() -> String {
    "./output".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            format: OutputFormat::default(),
        }
    }
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}
