use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::paystack::PaystackError;

#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Authentication errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    // Payment provider errors
    #[error("Payment provider rejected the request")]
    ProviderRejected(serde_json::Value),

    #[error("Paystack error: {0}")]
    Paystack(#[from] PaystackError),

    // Not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
            }
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, "AUTHENTICATION_FAILED", msg, None)
            }
            AppError::ProviderRejected(body) => {
                // Paystack signals rejection in the body it returns alongside
                // the non-200 status; hand that body back to the caller.
                let message = body
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Payment provider rejected the request")
                    .to_string();
                tracing::warn!(provider_message = %message, "Provider rejected request");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_REJECTED",
                    message,
                    Some(body),
                )
            }
            AppError::Paystack(PaystackError::AmountOverflow(amount)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Amount {} is too large to charge", amount),
                None,
            ),
            AppError::Paystack(e) => {
                tracing::error!("Paystack error: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "PAYSTACK_ERROR",
                    "Failed to communicate with payment provider".to_string(),
                    None,
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "Server configuration error".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
