use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub paystack: PaystackConfig,
    pub security: SecurityConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaystackConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,
    /// API base URL, overridable for tests
    pub api_base_url: String,
    /// Optional request timeout. None leaves the transport default in place,
    /// so callers needing bounded latency must set this.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub session_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

pub const DEFAULT_PAYSTACK_API_URL: &str = "https://api.paystack.co";

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("rate_limit.requests_per_second", 100)?
            .set_default("rate_limit.burst_size", 200)?
            .add_source(config::Environment::default().separator("_").try_parsing(true))
            .build()?;

        // Manual construction due to environment variable naming
        Ok(Config {
            server: ServerConfig {
                host: config
                    .get_string("server.host")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: config.get_int("server.port").unwrap_or(8080) as u16,
            },
            paystack: PaystackConfig {
                secret_key: config.get_string("paystack.secret.key")?,
                api_base_url: config
                    .get_string("paystack.api.base.url")
                    .unwrap_or_else(|_| DEFAULT_PAYSTACK_API_URL.to_string()),
                timeout_secs: config
                    .get_int("paystack.timeout.secs")
                    .ok()
                    .map(|v| v as u64),
            },
            security: SecurityConfig {
                session_secret: config.get_string("session.secret")?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: config
                    .get_int("rate.limit.requests.per.second")
                    .unwrap_or(100) as u32,
                burst_size: config.get_int("rate.limit.burst.size").unwrap_or(200) as u32,
            },
        })
    }
}
