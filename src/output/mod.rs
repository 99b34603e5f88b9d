//! CSV and JSON export
//!
//! Products serialize straight through serde, so the CSV column set and the
//! JSON field names always match the [`Product`] struct.

use crate::config::{OutputConfig, OutputFormat};
use crate::product::Product;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Builds the default timestamped export path, `products_<ts>.csv` or `.json`
pub fn default_export_path(out_dir: &str, format: OutputFormat) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let extension = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };
    Path::new(out_dir).join(format!("products_{timestamp}.{extension}"))
}

/// Writes products to `path`, or to a timestamped file under the configured
/// output directory when no explicit path is given. Returns the path written.
pub fn export(
    products: &[Product],
    output: &OutputConfig,
    path: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = path.unwrap_or_else(|| default_export_path(&output.out_dir, output.format));

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match output.format {
        OutputFormat::Csv => write_csv(products, &path)?,
        OutputFormat::Json => write_json(products, &path)?,
    }

    info!(path = %path.display(), products = products.len(), "export written");
    Ok(path)
}

fn write_csv(products: &[Product], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(products: &[Product], path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(products)?;
    fs::write(path, body)?;
    Ok(())
}
