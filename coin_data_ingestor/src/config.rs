//! Configuration for the `coin-data` binary.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoinConfig {
    /// CoinGecko coin id, e.g. `bitcoin` or `dogecoin`.
    pub coin_id: String,
    pub vs_currency: String,
    /// Days of history to request.
    pub days: u32,
    /// Fixed wait after each request.
    pub request_delay_secs: u64,
    pub output_dir: PathBuf,
    /// Name of the environment variable holding the demo API key.
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            coin_id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            days: 365,
            request_delay_secs: 2,
            output_dir: PathBuf::from("coin_data"),
            api_key_env: "COIN_GECKO".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl CoinConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fetch_script() {
        let cfg = CoinConfig::default();
        assert_eq!(cfg.days, 365);
        assert_eq!(cfg.request_delay(), Duration::from_secs(2));
        assert_eq!(cfg.output_dir, PathBuf::from("coin_data"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = toml::from_str::<CoinConfig>("coin = \"bitcoin\"").unwrap_err();
        assert!(err.to_string().contains("coin"));
    }
}
