//! CoinGecko public API (`/coins/{id}/market_chart` and `/coins/{id}/ohlc`).

pub mod params;
pub mod provider;
pub mod response;

pub use provider::CoinGeckoProvider;
