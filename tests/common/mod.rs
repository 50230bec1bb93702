#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use chrono::Utc;

use checkout_gateway::api::auth::{
    AuthBackend, AuthRejection, Credentials, Session, SignupPayload,
};
use checkout_gateway::api::create_router;
use checkout_gateway::config::{
    Config, PaystackConfig, RateLimitConfig, SecurityConfig, ServerConfig,
};
use checkout_gateway::models::Coin;
use checkout_gateway::services::{CoinCatalog, PaystackService};
use checkout_gateway::AppState;

pub const TEST_SECRET_KEY: &str = "sk_test_gateway";
pub const STUB_TOKEN: &str = "stub-token";
pub const STUB_PASSWORD: &str = "open sesame";

pub fn test_config(api_base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        paystack: PaystackConfig {
            secret_key: TEST_SECRET_KEY.to_string(),
            api_base_url: api_base_url.to_string(),
            timeout_secs: None,
        },
        security: SecurityConfig {
            session_secret: "test-session-secret".to_string(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 100,
            burst_size: 200,
        },
    }
}

pub fn test_coin(id: i64, symbol: &str, price_ngn: f64) -> Coin {
    Coin {
        id,
        cmc_id: id,
        name: symbol.to_string(),
        symbol: symbol.to_string(),
        slug: symbol.to_lowercase(),
        cmc_rank: id as i32,
        price_usd: price_ngn / 1_500.0,
        price_ngn,
        last_updated: Utc::now(),
    }
}

/// Fixed-behavior auth backend: registration always succeeds, the only valid
/// password is [`STUB_PASSWORD`], and the only live token is [`STUB_TOKEN`].
pub struct StubAuth;

#[async_trait]
impl AuthBackend for StubAuth {
    async fn register(&self, payload: SignupPayload) -> Result<Session, AuthRejection> {
        Ok(Session {
            token: STUB_TOKEN.to_string(),
            username: payload.username,
        })
    }

    async fn login(&self, credentials: Credentials) -> Result<Session, AuthRejection> {
        if credentials.password != STUB_PASSWORD {
            return Err(AuthRejection::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(Session {
            token: STUB_TOKEN.to_string(),
            username: credentials.username,
        })
    }

    async fn logout(&self, token: &str) -> Result<(), AuthRejection> {
        if token != STUB_TOKEN {
            return Err(AuthRejection::Unauthorized(
                "Unknown or expired session".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn test_app(api_base_url: &str) -> Router {
    test_app_with_coins(
        api_base_url,
        vec![
            test_coin(1, "BTC", 120_000.0),
            test_coin(2, "ETH", 8_000.0),
            test_coin(3, "SOL", 300.0),
        ],
    )
}

pub fn test_app_with_coins(api_base_url: &str, coins: Vec<Coin>) -> Router {
    let config = test_config(api_base_url);
    let paystack = PaystackService::new(&config.paystack);

    let state = AppState::new(config, paystack, CoinCatalog::new(coins), Arc::new(StubAuth));

    create_router(state)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
