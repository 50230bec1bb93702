use chrono::Utc;

use crate::models::{Coin, CoinPage};

const LISTING_PATH: &str = "/api/cryptos";

/// In-memory coin catalog.
///
/// The storefront sells a fixed set of coins loaded at startup; the catalog
/// is read-only afterwards and shared across requests.
pub struct CoinCatalog {
    coins: Vec<Coin>,
}

impl CoinCatalog {
    pub fn new(mut coins: Vec<Coin>) -> Self {
        coins.sort_by_key(|c| c.cmc_rank);
        Self { coins }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_coins())
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Coin> {
        self.coins.iter().find(|c| c.id == id)
    }

    /// One page of the listing, 1-based. Pages past the end are empty rather
    /// than an error.
    pub fn page(&self, page: usize, page_size: usize) -> CoinPage {
        let page = page.max(1);
        let page_size = page_size.max(1);

        let start = (page - 1).saturating_mul(page_size);
        let results: Vec<Coin> = self
            .coins
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        let next = if start + results.len() < self.coins.len() {
            Some(listing_url(page + 1, page_size))
        } else {
            None
        };
        let previous = if page > 1 && (page - 2).saturating_mul(page_size) < self.coins.len() {
            Some(listing_url(page - 1, page_size))
        } else {
            None
        };

        CoinPage {
            count: self.coins.len(),
            next,
            previous,
            results,
        }
    }
}

fn listing_url(page: usize, page_size: usize) -> String {
    format!("{}?page={}&page_size={}", LISTING_PATH, page, page_size)
}

/// Seed listing used when no external price feed is wired in.
fn default_coins() -> Vec<Coin> {
    let now = Utc::now();
    let coin = |id, cmc_id, name: &str, symbol: &str, slug: &str, cmc_rank, price_usd: f64| Coin {
        id,
        cmc_id,
        name: name.to_string(),
        symbol: symbol.to_string(),
        slug: slug.to_string(),
        cmc_rank,
        price_usd,
        // NGN prices derived from a fixed reference rate; a live deployment
        // would refresh these from the upstream feed.
        price_ngn: price_usd * NGN_PER_USD,
        last_updated: now,
    };

    vec![
        coin(1, 1, "Bitcoin", "BTC", "bitcoin", 1, 67_250.0),
        coin(2, 1027, "Ethereum", "ETH", "ethereum", 2, 3_510.0),
        coin(3, 825, "Tether", "USDT", "tether", 3, 1.0),
        coin(4, 1839, "BNB", "BNB", "bnb", 4, 584.0),
        coin(5, 5426, "Solana", "SOL", "solana", 5, 172.0),
        coin(6, 52, "XRP", "XRP", "xrp", 6, 0.62),
        coin(7, 2010, "Cardano", "ADA", "cardano", 7, 0.45),
        coin(8, 74, "Dogecoin", "DOGE", "dogecoin", 8, 0.16),
        coin(9, 1958, "TRON", "TRX", "tron", 9, 0.13),
        coin(10, 3890, "Polygon", "MATIC", "polygon", 10, 0.72),
    ]
}

const NGN_PER_USD: f64 = 1_500.0;
