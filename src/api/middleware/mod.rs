pub mod logging;
pub mod rate_limit;

pub use logging::{init_tracing, request_logging};
pub use rate_limit::{create_rate_limiter, rate_limit_with_state, SharedRateLimiter};
