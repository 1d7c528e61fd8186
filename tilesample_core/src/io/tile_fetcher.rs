//! This module provides functionality for fetching tile payloads from HTTP
//! endpoints.
//!
//! # Overview
//!
//! The [`TileFetcher`] trait is the seam between the sampling pipeline and
//! the transport: the pipeline only needs "bytes behind a URL". The default
//! implementation is [`HttpTileFetcher`], backed by a shared `reqwest`
//! client; tests and custom transports implement the trait themselves.

use crate::Blob;
use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Retrieves raw tile payloads by URL.
#[async_trait]
pub trait TileFetcher: Send + Sync {
	/// Fetches the payload behind `url`.
	///
	/// Transport failures and non-2xx responses are both errors. A failed
	/// fetch is not retried; retry policy is the caller's concern.
	async fn fetch(&self, url: &str) -> Result<Blob>;
}

/// A [`TileFetcher`] backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTileFetcher {
	client: Client,
}

impl HttpTileFetcher {
	/// Creates a fetcher with keep-alive connections and a 30 second request
	/// timeout.
	pub fn new() -> Result<HttpTileFetcher> {
		let client = Client::builder()
			.tcp_keepalive(Duration::from_secs(600))
			.timeout(Duration::from_secs(30))
			.build()?;

		Ok(HttpTileFetcher { client })
	}
}

#[async_trait]
impl TileFetcher for HttpTileFetcher {
	async fn fetch(&self, url: &str) -> Result<Blob> {
		log::debug!("fetching tile from '{url}'");

		let response = self.client.get(url).send().await?;

		if !response.status().is_success() {
			bail!("HTTP request to '{url}' failed with status {}", response.status());
		}

		let bytes = response.bytes().await?;
		Ok(Blob::from(bytes.to_vec()))
	}
}
