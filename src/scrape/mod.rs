//! Concurrent product scraping
//!
//! A fixed pool of workers pulls URLs from a shared queue and extracts one
//! [`Product`] per URL. Results arrive over a channel in completion order;
//! the caller gets exactly one record per input URL regardless of fetch or
//! extraction outcome.

use crate::config::FetchConfig;
use crate::extract::extract_product;
use crate::product::Product;
use reqwest::Client;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Scrapes every URL with a bounded worker pool
///
/// The pool size is `max_workers` clamped to the number of URLs, so short
/// lists never spawn idle workers.
pub async fn scrape_all(
    client: &Client,
    urls: Vec<String>,
    fetch: &FetchConfig,
    max_workers: usize,
) -> Vec<Product> {
    if urls.is_empty() {
        return Vec::new();
    }

    let total = urls.len();
    let workers = max_workers.max(1).min(total);
    info!(urls = total, workers, "starting product scrape");

    let queue = Arc::new(Mutex::new(urls.into_iter().collect::<VecDeque<String>>()));
    let (tx, mut rx) = mpsc::channel::<Product>(total);

    let mut handles = Vec::with_capacity(workers);
    for worker_id in 0..workers {
        let queue = Arc::clone(&queue);
        let tx = tx.clone();
        let client = client.clone();
        let fetch = fetch.clone();

        handles.push(tokio::spawn(async move {
            loop {
                let url = { queue.lock().unwrap().pop_front() };
                let Some(url) = url else { break };

                debug!(worker_id, %url, "scraping product page");
                let product = extract_product(&client, &url, &fetch).await;
                if tx.send(product).await.is_err() {
                    break;
                }
            }
        }));
    }
    drop(tx);

    let mut products = Vec::with_capacity(total);
    while let Some(product) = rx.recv().await {
        products.push(product);
    }

    for handle in handles {
        let _ = handle.await;
    }

    info!(products = products.len(), "product scrape finished");
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::build_http_client;

    #[tokio::test]
    async fn test_empty_url_list_yields_no_products() {
        let fetch = FetchConfig::default();
        let client = build_http_client(&fetch).unwrap();
        let products = scrape_all(&client, Vec::new(), &fetch, 12).await;
        assert!(products.is_empty());
    }
}
