use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp config");
        file
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawl.max_pages, 20);
        assert_eq!(config.fetch.backoff_ms, 600);
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [fetch]
            connect-timeout-secs = 3
            read-timeout-secs = 10
            max-retries = 1
            backoff-ms = 100

            [crawl]
            include = ["/sale/"]
            exclude = ["/outlet/"]
            max-pages = 4
            max-products = 50

            [scrape]
            max-workers = 6

            [output]
            out-dir = "/tmp/catcher"
            format = "json"
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.fetch.connect_timeout_secs, 3);
        assert_eq!(config.crawl.exclude, vec!["/outlet/".to_string()]);
        assert_eq!(config.scrape.max_workers, 6);
        assert_eq!(config.output.out_dir, "/tmp/catcher");
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("[crawl\nmax-pages = 5");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config(Path::new("/nonexistent/catcher.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_values() {
        let file = write_config(
            r#"
            [crawl]
            max-pages = 0
            "#,
        );
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }
}
