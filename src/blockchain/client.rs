//! Blockchain data client with timeout and error handling.
//!
//! # Responsibilities
//! - Query the BlockCypher address endpoint for balance and tx count
//! - Enforce a per-request timeout
//! - Treat network errors, timeouts and non-2xx statuses as transport failures
//! - Convert satoshis to whole BTC before handing data back

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::blockchain::types::{
    AddressBalance, BlockchainConfig, BlockchainError, BlockchainResult, WalletDetails,
};

/// Source of live address data.
#[async_trait]
pub trait BlockchainClient: Send + Sync {
    /// Fetch current balance and transaction count for `address`.
    ///
    /// Issues exactly one outbound request. No retries.
    async fn fetch(&self, address: &str) -> BlockchainResult<WalletDetails>;
}

/// [`BlockchainClient`] for the BlockCypher REST API.
#[derive(Clone)]
pub struct BlockCypherClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl BlockCypherClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `config` - Provider base URL and timeout
    pub fn new(config: &BlockchainConfig) -> BlockchainResult<Self> {
        let base_url = parse_base_url(&config.api_base_url)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BlockchainError::Http(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!(
            api_base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "Blockchain client initialized"
        );

        Ok(Self {
            http,
            base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build the lookup URL for `address`, percent-encoding it as one path segment.
    pub fn address_url(&self, address: &str) -> BlockchainResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BlockchainError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(address);
        Ok(url)
    }

    fn map_request_error(&self, e: reqwest::Error) -> BlockchainError {
        if e.is_timeout() {
            BlockchainError::Timeout(self.timeout_secs)
        } else {
            BlockchainError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl BlockchainClient for BlockCypherClient {
    async fn fetch(&self, address: &str) -> BlockchainResult<WalletDetails> {
        let url = self.address_url(address)?;

        tracing::debug!(address = %address, "Fetching address data");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlockchainError::Status(status.as_u16()));
        }

        let body: AddressBalance = response.json().await.map_err(|e| {
            if e.is_timeout() {
                BlockchainError::Timeout(self.timeout_secs)
            } else {
                BlockchainError::Decode(e.to_string())
            }
        })?;

        Ok(body.into_details(address))
    }
}

impl std::fmt::Debug for BlockCypherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockCypherClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> BlockchainResult<Url> {
    let url: Url = raw.parse().map_err(|e: url::ParseError| BlockchainError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BlockchainError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
