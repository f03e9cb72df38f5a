//! Wallet API handlers.
//!
//! Handlers only translate between HTTP and [`WalletService`]; every business
//! rule lives in the service.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::blockchain::WalletDetails;
use crate::http::response::{ApiError, ApiResult};
use crate::http::server::AppState;
use crate::wallets::{Registration, TrackedWallets};

/// Liveness banner.
#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
}

pub async fn home() -> Json<Banner> {
    Json(Banner {
        message: "Coin Tracker API is running",
    })
}

/// `POST /api/wallets` with body `{"address": ...}`.
pub async fn add_wallet(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Registration>)> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected wallet registration body");
        match rejection {
            JsonRejection::BytesRejection(e) => ApiError::UnreadableBody {
                status: e.status(),
                message: e.body_text(),
            },
            _ => ApiError::InvalidBody,
        }
    })?;

    let candidate = body.get("address").cloned().unwrap_or(Value::Null);
    let registration = state.wallets.register_value(&candidate).await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// `GET /api/wallets`
pub async fn list_wallets(State(state): State<AppState>) -> ApiResult<Json<TrackedWallets>> {
    Ok(Json(state.wallets.list_tracked().await?))
}

/// `GET /api/wallets/{address}`
pub async fn wallet_details(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<Json<WalletDetails>> {
    Ok(Json(state.wallets.wallet_details(&address).await?))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::blockchain::BlockchainError;
    use crate::config::TrackerConfig;
    use crate::http::HttpServer;
    use crate::store::MemoryStore;
    use crate::testing::StubChain;
    use crate::wallets::WalletService;

    const ADDR: &str = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";

    fn app(chain: Arc<StubChain>) -> Router {
        let service = WalletService::new(Arc::new(MemoryStore::new()), chain);
        HttpServer::new(TrackerConfig::default(), service).router()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post(body: &str) -> Request<Body> {
        Request::post("/api/wallets")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_home() {
        let app = app(Arc::new(StubChain::with_balance(0, 0)));
        let (status, body) = send(&app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Coin Tracker API is running"}));
    }

    #[tokio::test]
    async fn test_register_list_details() {
        let chain = Arc::new(StubChain::with_balance(250_000_000, 4));
        let app = app(chain.clone());

        let (status, body) = send(&app, post(&json!({"address": ADDR}).to_string())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"status": "tracking", "address": ADDR}));

        let (status, body) = send(&app, get("/api/wallets")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"wallets": [ADDR], "count": 1}));
        assert_eq!(chain.calls(), 0);

        let (status, body) = send(&app, get(&format!("/api/wallets/{}", ADDR))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"address": ADDR, "balance_btc": 2.5, "total_transactions": 4})
        );
        assert_eq!(chain.calls(), 1);
    }

    #[tokio::test]
    async fn test_register_errors() {
        let app = app(Arc::new(StubChain::with_balance(0, 0)));

        let (status, body) = send(&app, post(r#"{"address": "abc"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid Bitcoin address"}));

        let (status, body) = send(&app, post(r#"{"address": 42}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid Bitcoin address"}));

        let (status, _) = send(&app, post(r#"{}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, post("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid request body"}));

        send(&app, post(&json!({"address": ADDR}).to_string())).await;
        let (status, body) = send(&app, post(&json!({"address": ADDR}).to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Address already tracked"}));

        let (_, body) = send(&app, get("/api/wallets")).await;
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn test_oversized_body_keeps_its_status() {
        let mut config = TrackerConfig::default();
        config.listener.max_body_size = 16;
        let service = WalletService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(StubChain::with_balance(0, 0)),
        );
        let app = HttpServer::new(config, service).router();

        let (status, body) = send(&app, post(&json!({"address": ADDR}).to_string())).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].is_string());

        let (_, body) = send(&app, get("/api/wallets")).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_details_not_tracked() {
        let chain = Arc::new(StubChain::with_balance(0, 0));
        let app = app(chain.clone());

        let (status, body) = send(&app, get(&format!("/api/wallets/{}", ADDR))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Wallet not tracked"}));
        assert_eq!(chain.calls(), 0);
    }

    #[tokio::test]
    async fn test_details_transport_failure() {
        let chain = Arc::new(StubChain::failing(BlockchainError::Timeout(10)));
        let app = app(chain.clone());

        send(&app, post(&json!({"address": ADDR}).to_string())).await;
        let (status, body) = send(&app, get(&format!("/api/wallets/{}", ADDR))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({"error": "Provider timeout after 10 seconds"}));
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let app = app(Arc::new(StubChain::with_balance(0, 0)));

        let response = app.clone().oneshot(get("/api/wallets")).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));

        let request = Request::get("/api/wallets")
            .header("x-request-id", "client-chosen")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "client-chosen");
    }
}
