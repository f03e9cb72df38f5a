//! Error-to-response mapping.
//!
//! Every error body has the shape `{"error": "<message>"}`.
//!
//! | Error | Status |
//! |---|---|
//! | `InvalidFormat`, `AlreadyTracked`, bad body | 400 |
//! | unreadable body | rejection's own status (e.g. 413) |
//! | `NotTracked` | 404 |
//! | `Transport` | 502 |
//! | `Store` | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wallets::WalletError;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not usable JSON.
    #[error("Invalid request body")]
    InvalidBody,

    /// Request body could not be buffered (too large, aborted stream).
    #[error("{message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::UnreadableBody { status, .. } => *status,
            ApiError::Wallet(e) => match e {
                WalletError::InvalidFormat | WalletError::AlreadyTracked => StatusCode::BAD_REQUEST,
                WalletError::NotTracked => StatusCode::NOT_FOUND,
                WalletError::Transport(_) => StatusCode::BAD_GATEWAY,
                WalletError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Storage internals stay in the logs.
            ApiError::Wallet(WalletError::Store(e)) => {
                tracing::error!(error = %e, "Tracking store failure");
                "Internal storage error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
