//! Catcher command-line entry point
//!
//! Two modes: `category` crawls a listing and scrapes every discovered
//! product page; `products` scrapes an explicit URL list.

use anyhow::{bail, Context};
use catcher::config::{load_config, Config, OutputFormat};
use catcher::crawler::build_http_client;
use catcher::url::{gather_url_list, parse_filters};
use catcher::{collect_category_links, scrape_all, Product};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catcher: a product catalog scraper for irregular e-commerce markup
#[derive(Parser, Debug)]
#[command(name = "catcher")]
#[command(version = "0.5.3")]
#[command(about = "Scrapes product catalogs from irregular e-commerce markup", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl a category listing, then scrape every discovered product page
    Category {
        /// Category listing URL to start from
        url: String,

        /// Keep only URLs containing one of these fragments (';'-separated)
        #[arg(long, value_name = "FRAGMENTS")]
        include: Option<String>,

        /// Drop URLs containing one of these fragments (';'-separated)
        #[arg(long, value_name = "FRAGMENTS")]
        exclude: Option<String>,

        /// Maximum listing pages to visit
        #[arg(long, value_name = "N")]
        max_pages: Option<usize>,

        /// Maximum product URLs to collect
        #[arg(long, value_name = "N")]
        max_products: Option<usize>,

        /// Print discovered product URLs without scraping them
        #[arg(long)]
        preview: bool,

        /// Output file path (default: timestamped file in the output dir)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Output format: csv or json
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Scrape an explicit list of product URLs
    Products {
        /// Product page URLs
        urls: Vec<String>,

        /// File with one product URL per line
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file path (default: timestamped file in the output dir)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Output format: csv or json
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("config file {}", path.display()))?
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Category {
            url,
            include,
            exclude,
            max_pages,
            max_products,
            preview,
            out,
            format,
        } => {
            let config = apply_category_overrides(
                config,
                include.as_deref(),
                exclude.as_deref(),
                max_pages,
                max_products,
                format.as_deref(),
            )?;

            let client = build_http_client(&config.fetch)?;
            let urls =
                collect_category_links(&client, &url, &config.crawl, &config.fetch).await;
            tracing::info!(urls = urls.len(), "category crawl finished");

            if preview {
                for url in &urls {
                    println!("{url}");
                }
                println!("\n{} product URL(s) discovered", urls.len());
                return Ok(());
            }

            let products =
                scrape_all(&client, urls, &config.fetch, config.scrape.max_workers).await;
            report(&products, &config, out)?;
        }

        Command::Products {
            urls,
            input,
            out,
            format,
        } => {
            let mut config = config;
            if let Some(raw) = format.as_deref() {
                config.output.format = parse_format(raw)?;
            }

            let urls = gather_url_list(urls, input.as_deref())
                .context("building the product URL list")?;
            if urls.is_empty() {
                bail!("no product URLs given; pass them as arguments or via --input");
            }

            let client = build_http_client(&config.fetch)?;
            let products =
                scrape_all(&client, urls, &config.fetch, config.scrape.max_workers).await;
            report(&products, &config, out)?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("catcher=info,warn"),
            1 => EnvFilter::new("catcher=debug,info"),
            2 => EnvFilter::new("catcher=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Folds the `category` CLI flags into the loaded configuration
fn apply_category_overrides(
    mut config: Config,
    include: Option<&str>,
    exclude: Option<&str>,
    max_pages: Option<usize>,
    max_products: Option<usize>,
    format: Option<&str>,
) -> anyhow::Result<Config> {
    if let Some(raw) = include {
        config.crawl.include = parse_filters(raw);
    }
    if let Some(raw) = exclude {
        config.crawl.exclude = parse_filters(raw);
    }
    if let Some(n) = max_pages {
        config.crawl.max_pages = n;
    }
    if let Some(n) = max_products {
        config.crawl.max_products = n;
    }
    if let Some(raw) = format {
        config.output.format = parse_format(raw)?;
    }
    catcher::config::validate(&config)?;
    Ok(config)
}

fn parse_format(raw: &str) -> anyhow::Result<OutputFormat> {
    match raw.to_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format '{other}'; expected csv or json"),
    }
}

/// Exports the scrape results and prints a short summary line
fn report(products: &[Product], config: &Config, out: Option<PathBuf>) -> anyhow::Result<()> {
    let noted = products.iter().filter(|p| p.note.is_some()).count();
    let path = catcher::output::export(products, &config.output, out)?;
    println!(
        "{} product(s) written to {} ({} with notes)",
        products.len(),
        path.display(),
        noted
    );
    Ok(())
}
