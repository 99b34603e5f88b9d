use crate::config::types::Config;
use crate::ConfigError;

/// Validates a configuration after parsing
///
/// Checks that caps and timeouts are usable. Filter substrings are free-form
/// and intentionally unchecked: the operator may match on any URL fragment.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch(config)?;
    validate_crawl(config)?;
    validate_scrape(config)?;
    Ok(())
}

fn validate_fetch(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.connect-timeout-secs must be at least 1".to_string(),
        ));
    }
    if config.fetch.read_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.read-timeout-secs must be at least 1".to_string(),
        ));
    }
    if config.fetch.read_timeout_secs < config.fetch.connect_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "fetch.read-timeout-secs ({}) must not be smaller than fetch.connect-timeout-secs ({})",
            config.fetch.read_timeout_secs, config.fetch.connect_timeout_secs
        )));
    }
    Ok(())
}

fn validate_crawl(config: &Config) -> Result<(), ConfigError> {
    if config.crawl.max_pages == 0 {
        return Err(ConfigError::Validation(
            "crawl.max-pages must be at least 1".to_string(),
        ));
    }
    if config.crawl.max_products == 0 {
        return Err(ConfigError::Validation(
            "crawl.max-products must be at least 1".to_string(),
        ));
    }
    for entry in config.crawl.include.iter().chain(&config.crawl.exclude) {
        if entry.trim().is_empty() {
            return Err(ConfigError::Validation(
                "crawl filter substrings must not be blank".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_scrape(config: &Config) -> Result<(), ConfigError> {
    if config.scrape.max_workers == 0 {
        return Err(ConfigError::Validation(
            "scrape.max-workers must be at least 1".to_string(),
        ));
    }
    Ok(())
}
