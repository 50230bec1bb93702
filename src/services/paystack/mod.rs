mod client;
mod transactions;

pub use client::{PaystackClient, PaystackError};
pub use transactions::*;

use std::sync::Arc;

use crate::config::PaystackConfig;

pub struct PaystackService {
    client: PaystackClient,
}

impl PaystackService {
    pub fn new(config: &PaystackConfig) -> Self {
        Self {
            client: PaystackClient::new(config),
        }
    }

    pub fn client(&self) -> &PaystackClient {
        &self.client
    }
}

pub type SharedPaystackService = Arc<PaystackService>;
