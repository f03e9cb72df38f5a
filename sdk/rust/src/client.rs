use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub status: String, // "tracking"
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletList {
    pub wallets: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletDetails {
    pub address: String,
    pub balance_btc: f64,
    pub total_transactions: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors returned by [`TrackerClient`].
#[derive(Debug)]
pub enum SdkError {
    /// The request never produced a usable response.
    Http(reqwest::Error),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The base URL cannot carry a path.
    InvalidUrl(String),
}

impl std::fmt::Display for SdkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SdkError::Http(e) => write!(f, "HTTP error: {}", e),
            SdkError::Api { status, message } => write!(f, "API returned {}: {}", status, message),
            SdkError::InvalidUrl(msg) => write!(f, "Invalid base URL: {}", msg),
        }
    }
}

impl std::error::Error for SdkError {}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Http(e)
    }
}

pub struct TrackerClient {
    client: Client,
    base_url: String,
}

impl TrackerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Start tracking an address.
    pub async fn add_wallet(&self, address: &str) -> Result<Registration, SdkError> {
        let resp = self.post_wallet(&json!({ "address": address })).await?;
        decode(resp).await
    }

    /// List all tracked addresses.
    pub async fn list_wallets(&self) -> Result<WalletList, SdkError> {
        let resp = self.client.get(self.endpoint(&["api", "wallets"])?).send().await?;
        decode(resp).await
    }

    /// Live balance and transaction count for a tracked address.
    pub async fn wallet_details(&self, address: &str) -> Result<WalletDetails, SdkError> {
        let url = self.endpoint(&["api", "wallets", address])?;
        let resp = self.client.get(url).send().await?;
        decode(resp).await
    }

    /// POST an arbitrary JSON body to the registration endpoint.
    pub async fn post_wallet(&self, body: &Value) -> Result<Response, SdkError> {
        let resp = self
            .client
            .post(self.endpoint(&["api", "wallets"])?)
            .json(body)
            .send()
            .await?;
        Ok(resp)
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SdkError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| SdkError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SdkError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, SdkError> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or(text);
        return Err(SdkError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| SdkError::Api {
        status: status.as_u16(),
        message: format!("undecodable response: {}", e),
    })
}
