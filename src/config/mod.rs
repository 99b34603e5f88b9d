//! Configuration module for catcher
//!
//! Configuration comes from an optional TOML file plus CLI overrides. All
//! tables and fields have defaults, so a missing file yields a fully usable
//! configuration.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{
    Config, CrawlFilter, FetchConfig, OutputConfig, OutputFormat, ScrapeConfig,
    DEFAULT_MAX_PAGES, DEFAULT_MAX_PRODUCTS, MAX_URL_LIST,
};
pub use validation::validate;
