/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::github
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Two-step descriptor retrieval: code-search the cask
    repository for descriptor files, then fetch one file's raw
    text through its blob record.

  Security / Safety Notes:
    Performs read-only HTTPS requests against the public code
    hosting API; unauthenticated, so subject to its rate caps.

  Dependencies:
    reqwest for HTTP, serde for response parsing, urlencoding
    for query composition.

  Operational Scope:
    Serves the alternate search mode where no prefetched JSON
    index is available.

  Revision History:
    2025-07-03 COD  Implemented two-step descriptor client.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Sequential chained fetches with explicit error mapping
    - Bounded retry logic with exponential backoff
    - No descriptor content interpretation in the transport
============================================================*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tokio::time::sleep;
use urlencoding::encode;

use crate::cask::{CaskLocation, ResolvedDownload};
use crate::config::ClientConfig;
use crate::error::{Result, SyncaskError};
use crate::logger::Logger;
use crate::resolver;

/// Client for the code-search descriptor flow.
#[derive(Clone)]
pub struct CodeSearchClient {
    client: reqwest::Client,
    search_url: String,
    search_repo: String,
    max_retries: usize,
    logger: Option<Arc<Logger>>,
}

#[derive(Debug, Deserialize)]
struct CodeSearchResponse {
    total_count: Option<u64>,
    #[serde(default)]
    items: Vec<CodeSearchItem>,
}

#[derive(Debug, Deserialize)]
struct CodeSearchItem {
    name: String,
    url: String,
}

/// Blob record for one descriptor file; only the raw-content
/// location is consumed.
#[derive(Debug, Deserialize)]
struct DescriptorBlob {
    download_url: Option<String>,
}

impl CodeSearchClient {
    /// Construct a new client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| SyncaskError::Network(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            search_repo: config.search_repo.clone(),
            max_retries: config.max_retries.max(1),
            logger: None,
        })
    }

    /// Attach a logger for transport diagnostics.
    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Search the cask repository for descriptor files matching
    /// `query`. Only `.rb` descriptors are kept; the suffix is
    /// stripped for display. Results are ordered ascending by name
    /// under case-sensitive lexical comparison.
    pub async fn search_casks(&self, query: &str) -> Result<Vec<CaskLocation>> {
        let url = format!(
            "{}?q=repo:{}+{}",
            self.search_url,
            self.search_repo,
            encode(query)
        );
        let payload = self.get_with_retry(&url).await?;
        let response: CodeSearchResponse =
            serde_json::from_slice(&payload).map_err(|err| {
                SyncaskError::Serialization(format!(
                    "Failed to decode code-search response from {url}: {err}"
                ))
            })?;

        let locations = locations_from(response);

        if let Some(logger) = &self.logger {
            logger.info(
                "SEARCH",
                format!("Query `{query}` matched {} descriptors", locations.len()),
            );
        }
        Ok(locations)
    }

    /// Fetch the raw descriptor text behind one search hit.
    ///
    /// Two sequential fetches: the blob record first, then the raw
    /// content it points to. The second target is only known after
    /// the first completes.
    pub async fn fetch_descriptor(&self, location: &CaskLocation) -> Result<String> {
        let payload = self.get_with_retry(location.url.as_str()).await?;
        let blob: DescriptorBlob = serde_json::from_slice(&payload).map_err(|err| {
            SyncaskError::Serialization(format!(
                "Failed to decode blob record from {}: {err}",
                location.url
            ))
        })?;

        let download_url = blob.download_url.ok_or_else(|| {
            SyncaskError::Serialization(format!(
                "Blob record from {} carries no download_url",
                location.url
            ))
        })?;

        let raw = self.get_with_retry(&download_url).await?;
        let text = String::from_utf8(raw).map_err(|err| {
            SyncaskError::Serialization(format!(
                "Descriptor at {download_url} is not valid UTF-8: {err}"
            ))
        })?;

        if let Some(logger) = &self.logger {
            logger.debug(
                "FETCH",
                format!("Fetched descriptor `{}` ({} bytes)", location.name, text.len()),
            );
        }
        Ok(text)
    }

    /// Resolve one search hit end to end: fetch its descriptor text
    /// and run the resolution pipeline over it.
    pub async fn resolve_download(&self, location: &CaskLocation) -> Result<ResolvedDownload> {
        let text = self.fetch_descriptor(location).await?;
        resolver::resolve(&text)
    }

    async fn get_with_retry(&self, url: &str) -> Result<Vec<u8>> {
        let mut attempt = 0;
        loop {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|err| SyncaskError::Network(format!("Request to {url} failed: {err}")))?;

            if response.status() == StatusCode::OK {
                let bytes = response.bytes().await.map_err(|err| {
                    SyncaskError::Network(format!("Failed to read body from {url}: {err}"))
                })?;
                return Ok(bytes.to_vec());
            }

            attempt += 1;
            if attempt >= self.max_retries {
                return Err(SyncaskError::Network(format!(
                    "Request to {url} failed with status {} after {attempt} attempts",
                    response.status()
                )));
            }
            if let Some(logger) = &self.logger {
                logger.warn(
                    "FETCH",
                    format!("Status {} from {url}, attempt {attempt}", response.status()),
                );
            }
            let exponent = (attempt as u32).min(8);
            let backoff = Duration::from_millis(200_u64.saturating_mul(1_u64 << exponent));
            sleep(backoff).await;
        }
    }
}

/// Shape a code-search response into ordered descriptor locations.
/// A zero total count short-circuits; non-`.rb` items and items with
/// unparseable blob URLs are skipped rather than failing the search.
fn locations_from(response: CodeSearchResponse) -> Vec<CaskLocation> {
    if response.total_count.unwrap_or(0) == 0 {
        return Vec::new();
    }

    let mut locations = Vec::new();
    for item in response.items {
        let Some(name) = item.name.strip_suffix(".rb") else {
            continue;
        };
        let Ok(blob_url) = Url::parse(&item.url) else {
            continue;
        };
        locations.push(CaskLocation {
            name: name.to_string(),
            url: blob_url,
        });
    }
    locations.sort_by(|a, b| a.name.cmp(&b.name));
    locations
}
