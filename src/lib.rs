pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use std::sync::Arc;

use api::auth::AuthBackend;
use config::Config;
use services::{CoinCatalog, PaystackService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub paystack: Arc<PaystackService>,
    pub catalog: Arc<CoinCatalog>,
    pub auth: Arc<dyn AuthBackend>,
}

impl AppState {
    pub fn new(
        config: Config,
        paystack: PaystackService,
        catalog: CoinCatalog,
        auth: Arc<dyn AuthBackend>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            paystack: Arc::new(paystack),
            catalog: Arc::new(catalog),
            auth,
        }
    }
}
