use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{PaystackClient, PaystackError};

const INITIALIZE_ENDPOINT: &str = "/transaction/initialize";

/// Kobo per naira. Paystack amounts are transmitted in minor units.
const MINOR_UNITS_PER_MAJOR: i64 = 100;

#[derive(Debug, Clone, Serialize)]
pub struct InitializeTransactionRequest {
    pub email: String,
    /// Amount in minor units (kobo)
    pub amount: i64,
}

/// The fields consumed from a successful initialization response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TransactionInit {
    pub authorization_url: String,
    pub reference: String,
}

/// Outcome of a transaction initialization.
///
/// Paystack signals rejection through the HTTP status, and the contract for
/// this operation hands the raw response body back to the caller on any
/// non-200 status rather than raising. Both arms are therefore successful
/// returns; only transport and parse failures surface as [`PaystackError`].
#[derive(Debug, Clone, PartialEq)]
pub enum InitializeOutcome {
    Initialized(TransactionInit),
    Rejected(serde_json::Value),
}

impl PaystackClient {
    /// Initialize a hosted checkout for `amount_major` whole naira.
    ///
    /// The amount is converted to kobo (x100) before transmission; a checked
    /// multiply guards the conversion. On 200 the response must carry
    /// `data.authorization_url` and `data.reference`, otherwise the response
    /// is malformed and no partial result is returned.
    pub async fn initialize_transaction(
        &self,
        email: &str,
        amount_major: i64,
    ) -> Result<InitializeOutcome, PaystackError> {
        let request = InitializeTransactionRequest {
            email: email.to_string(),
            amount: to_minor_units(amount_major)?,
        };

        let response = self.post(INITIALIZE_ENDPOINT, &request).await?;
        let status = response.status();
        let body = response.text().await?;

        let json: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Paystack response: {} - Body: {}", e, body);
            PaystackError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        if status != StatusCode::OK {
            tracing::warn!(
                status = %status,
                "Paystack declined transaction initialization"
            );
            return Ok(InitializeOutcome::Rejected(json));
        }

        let data = json.get("data").ok_or_else(|| {
            PaystackError::MalformedResponse("Response is missing `data`".to_string())
        })?;

        let init: TransactionInit = serde_json::from_value(data.clone()).map_err(|e| {
            PaystackError::MalformedResponse(format!("Incomplete `data` object: {}", e))
        })?;

        Ok(InitializeOutcome::Initialized(init))
    }
}

pub(crate) fn to_minor_units(amount_major: i64) -> Result<i64, PaystackError> {
    amount_major
        .checked_mul(MINOR_UNITS_PER_MAJOR)
        .ok_or(PaystackError::AmountOverflow(amount_major))
}
