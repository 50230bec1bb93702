use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc};

pub type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Create a new rate limiter with the specified requests per second and burst size
pub fn create_rate_limiter(requests_per_second: u32, burst_size: u32) -> SharedRateLimiter {
    let quota = Quota::per_second(NonZeroU32::new(requests_per_second.max(1)).unwrap())
        .allow_burst(NonZeroU32::new(burst_size.max(1)).unwrap());

    Arc::new(RateLimiter::direct(quota))
}

/// Rate limiting middleware using token bucket algorithm
pub async fn rate_limit_with_state(
    rate_limiter: SharedRateLimiter,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    // Skip rate limiting for health checks
    if request.uri().path() == "/health" {
        return Ok(next.run(request).await);
    }

    match rate_limiter.check() {
        Ok(_) => Ok(next.run(request).await),
        Err(_) => {
            tracing::warn!(
                "Rate limit exceeded for request to {}",
                request.uri().path()
            );
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}
