use serde::{Deserialize, Serialize};

use crate::config::CoinConfig;

/// Provider-agnostic parameters for a daily history request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataParams {
    /// Coin identifier as understood by the provider (e.g. `bitcoin`).
    pub coin_id: String,
    /// Quote currency (e.g. `usd`).
    pub vs_currency: String,
    /// Number of days back from now.
    pub days: u32,
}

impl From<&CoinConfig> for MarketDataParams {
    fn from(cfg: &CoinConfig) -> Self {
        Self {
            coin_id: cfg.coin_id.clone(),
            vs_currency: cfg.vs_currency.clone(),
            days: cfg.days,
        }
    }
}
