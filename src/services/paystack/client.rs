use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::PaystackConfig;

/// Errors raised by the Paystack client.
///
/// Provider rejections (non-200 responses) are deliberately absent here: they
/// are returned to the caller as data, not as errors. See
/// [`super::InitializeOutcome`].
#[derive(Error, Debug)]
pub enum PaystackError {
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Amount {0} cannot be represented in minor units")]
    AmountOverflow(i64),
}

/// Low-level Paystack API client.
///
/// The secret key is injected at construction and held immutably for the
/// lifetime of the client; every call reuses the same credential. The client
/// is cheap to clone and safe to share across concurrent requests.
#[derive(Clone)]
pub struct PaystackClient {
    http_client: Client,
    secret_key: String,
    base_url: String,
}

impl PaystackClient {
    pub fn new(config: &PaystackConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http_client = builder.build().expect("Failed to create HTTP client");

        Self {
            http_client,
            secret_key: config.secret_key.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<reqwest::Response, PaystackError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(body)
            .send()
            .await?;

        Ok(response)
    }
}
