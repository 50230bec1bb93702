mod common;

use common::*;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn buy_returns_checkout_redirect() {
    let server = MockServer::start().await;

    // BTC is seeded at 120,000 NGN; two units come to 240,000 naira,
    // transmitted as 24,000,000 kobo.
    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .and(body_json(json!({
            "email": "buyer@example.com",
            "amount": 24_000_000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.example/abc",
                "access_code": "acc_abc",
                "reference": "ref_42"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_app(&server.uri())
        .oneshot(json_request(
            "POST",
            "/api/cryptos/buy",
            json!({"email": "buyer@example.com", "coin_id": 1, "quantity": 2.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["url"], "https://checkout.paystack.example/abc");
    assert_eq!(body["reference"], "ref_42");
}

#[tokio::test]
async fn provider_rejection_surfaces_as_bad_gateway() {
    let server = MockServer::start().await;
    let rejection = json!({"status": false, "message": "Invalid key"});

    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .respond_with(ResponseTemplate::new(401).set_body_json(rejection.clone()))
        .mount(&server)
        .await;

    let response = test_app(&server.uri())
        .oneshot(json_request(
            "POST",
            "/api/cryptos/buy",
            json!({"email": "buyer@example.com", "coin_id": 1, "quantity": 1.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "PROVIDER_REJECTED");
    assert_eq!(body["error"]["message"], "Invalid key");
    // The provider's body rides along unchanged for the caller to inspect
    assert_eq!(body["error"]["details"], rejection);
}

#[tokio::test]
async fn buy_unknown_coin_is_not_found() {
    let server = MockServer::start().await;

    let response = test_app(&server.uri())
        .oneshot(json_request(
            "POST",
            "/api/cryptos/buy",
            json!({"email": "buyer@example.com", "coin_id": 99, "quantity": 1.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn buy_with_zero_quantity_is_rejected() {
    let server = MockServer::start().await;

    let response = test_app(&server.uri())
        .oneshot(json_request(
            "POST",
            "/api/cryptos/buy",
            json!({"email": "buyer@example.com", "coin_id": 1, "quantity": 0.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn list_coins_is_paginated() {
    let response = test_app("http://127.0.0.1:1")
        .oneshot(get_request("/api/cryptos?page=1&page_size=2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["next"], "/api/cryptos?page=2&page_size=2");
    assert_eq!(body["previous"], serde_json::Value::Null);
}

#[tokio::test]
async fn get_coin_returns_listing() {
    let response = test_app("http://127.0.0.1:1")
        .oneshot(get_request("/api/cryptos/2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["symbol"], "ETH");
    assert_eq!(body["price_ngn"], 8_000.0);
}

#[tokio::test]
async fn get_unknown_coin_is_not_found() {
    let response = test_app("http://127.0.0.1:1")
        .oneshot(get_request("/api/cryptos/99"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check_reports_ok() {
    let response = test_app("http://127.0.0.1:1")
        .oneshot(get_request("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn service_status_reports_catalog_size() {
    let response = test_app("http://127.0.0.1:1")
        .oneshot(get_request("/api/v1/status"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["paystack"], true);
    assert_eq!(body["services"]["catalog_coins"], 3);
}
