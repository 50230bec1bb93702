use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Coin, CoinPage};
use crate::services::paystack::InitializeOutcome;
use crate::AppState;

const DEFAULT_PAGE_SIZE: usize = 50;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListCoinsQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

pub async fn list_coins(
    State(state): State<AppState>,
    Query(query): Query<ListCoinsQuery>,
) -> AppResult<Json<CoinPage>> {
    let page = query.page.unwrap_or(1).max(1);
    let page_size = query
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    Ok(Json(state.catalog.page(page, page_size)))
}

pub async fn get_coin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Coin>> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Coin {} not found", id)))
}

#[derive(Debug, Deserialize, Validate)]
pub struct BuyRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub coin_id: i64,
    #[validate(range(min = 0.00000001, message = "Quantity must be greater than 0"))]
    pub quantity: f64,
}

/// Exactly what the storefront needs for the redirect to the hosted checkout.
#[derive(Debug, Serialize)]
pub struct BuyResponse {
    pub url: String,
    pub reference: String,
}

pub async fn buy_coin(
    State(state): State<AppState>,
    Json(request): Json<BuyRequest>,
) -> AppResult<Json<BuyResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    let coin = state
        .catalog
        .get(request.coin_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Coin {} not found", request.coin_id)))?;

    let total_ngn = coin.price_ngn * request.quantity;
    if !total_ngn.is_finite() || total_ngn < 1.0 {
        return Err(AppError::Validation(
            "Order total must be at least 1 NGN".to_string(),
        ));
    }
    // Charges go out in whole naira
    let amount_major = total_ngn.round() as i64;

    let outcome = state
        .paystack
        .client()
        .initialize_transaction(&request.email, amount_major)
        .await?;

    match outcome {
        InitializeOutcome::Initialized(init) => {
            tracing::info!(
                coin = %coin.symbol,
                amount_ngn = amount_major,
                reference = %init.reference,
                "Checkout initialized"
            );

            Ok(Json(BuyResponse {
                url: init.authorization_url,
                reference: init.reference,
            }))
        }
        InitializeOutcome::Rejected(body) => Err(AppError::ProviderRejected(body)),
    }
}
