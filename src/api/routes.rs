use axum::{
    body::Body,
    http::Request,
    middleware::{self, Next},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::auth::auth_router;
use crate::api::handlers;
use crate::api::middleware::{create_rate_limiter, rate_limit_with_state, request_logging};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/v1/status", get(handlers::service_status));

    // Coin catalog and checkout routes
    let crypto_routes = Router::new()
        .route("/", get(handlers::list_coins))
        .route("/buy", post(handlers::buy_coin))
        .route("/:id", get(handlers::get_coin));

    let rate_limiter = create_rate_limiter(
        state.config.rate_limit.requests_per_second,
        state.config.rate_limit.burst_size,
    );

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/auth", auth_router())
        .nest("/api/cryptos", crypto_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(middleware::from_fn(request_logging))
        .layer(middleware::from_fn(
            move |request: Request<Body>, next: Next| {
                let limiter = rate_limiter.clone();
                async move { rate_limit_with_state(limiter, request, next).await }
            },
        ))
        .with_state(state)
}
