use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceStatus,
}

#[derive(Serialize)]
pub struct ServiceStatus {
    pub paystack: bool,
    pub catalog_coins: usize,
}

pub async fn health_check() -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

pub async fn service_status(State(state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    let paystack_configured = !state.config.paystack.secret_key.is_empty();

    Ok(Json(StatusResponse {
        status: if paystack_configured { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceStatus {
            paystack: paystack_configured,
            catalog_coins: state.catalog.len(),
        },
    }))
}
