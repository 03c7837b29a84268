/*============================================================
  Synavera Project: Syn-Cask
  Module: syncask_core::brew
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Fetch the Homebrew cask JSON index in one request for the
    index-mode search surface.

  Security / Safety Notes:
    Performs read-only HTTPS requests to the public formulae
    API. No credentials are transmitted.

  Dependencies:
    reqwest for HTTP, serde for response parsing.

  Operational Scope:
    Supplies the in-memory index consumed by the search module.

  Revision History:
    2025-07-03 COD  Implemented asynchronous index client.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Bounded retry logic with exponential backoff
    - Structured response parsing with explicit error paths
    - Configurable timeouts and endpoints
============================================================*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::cask::CaskRecord;
use crate::config::ClientConfig;
use crate::error::{Result, SyncaskError};
use crate::logger::Logger;

/// Client for the one-shot cask JSON index.
#[derive(Clone)]
pub struct BrewIndexClient {
    client: reqwest::Client,
    index_url: String,
    max_retries: usize,
    logger: Option<Arc<Logger>>,
}

impl BrewIndexClient {
    /// Construct a new client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| SyncaskError::Network(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            index_url: config.index_url.clone(),
            max_retries: config.max_retries.max(1),
            logger: None,
        })
    }

    /// Attach a logger for transport diagnostics.
    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Download and decode the full cask index.
    ///
    /// Any fetch or decode failure surfaces as `IndexUnavailable`;
    /// the caller is expected to retry later, not here. The bounded
    /// backoff loop below only smooths over transient upstream
    /// status hiccups within one request.
    pub async fn fetch_index(&self) -> Result<Vec<CaskRecord>> {
        let mut attempt = 0;
        loop {
            let response = self
                .client
                .get(&self.index_url)
                .send()
                .await
                .map_err(|err| {
                    SyncaskError::IndexUnavailable(format!(
                        "request to {} failed: {err}",
                        self.index_url
                    ))
                })?;

            if response.status() == StatusCode::OK {
                let index = response.json::<Vec<CaskRecord>>().await.map_err(|err| {
                    SyncaskError::IndexUnavailable(format!(
                        "failed to decode index from {}: {err}",
                        self.index_url
                    ))
                })?;
                if let Some(logger) = &self.logger {
                    logger.info("INDEX", format!("Fetched {} cask records", index.len()));
                }
                return Ok(index);
            }

            attempt += 1;
            if attempt >= self.max_retries {
                return Err(SyncaskError::IndexUnavailable(format!(
                    "request to {} failed with status {} after {attempt} attempts",
                    self.index_url,
                    response.status()
                )));
            }
            if let Some(logger) = &self.logger {
                logger.warn(
                    "INDEX",
                    format!(
                        "Status {} from index endpoint, attempt {attempt}",
                        response.status()
                    ),
                );
            }
            let exponent = (attempt as u32).min(8);
            let backoff = Duration::from_millis(200_u64.saturating_mul(1_u64 << exponent));
            sleep(backoff).await;
        }
    }
}
