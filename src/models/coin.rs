use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listed cryptocurrency, priced in USD and NGN.
///
/// `cmc_id` and `cmc_rank` come from the upstream CoinMarketCap feed the
/// catalog is seeded from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coin {
    pub id: i64,
    pub cmc_id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub cmc_rank: i32,
    pub price_usd: f64,
    pub price_ngn: f64,
    pub last_updated: DateTime<Utc>,
}

/// One page of the coin listing.
#[derive(Debug, Clone, Serialize)]
pub struct CoinPage {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Coin>,
}
