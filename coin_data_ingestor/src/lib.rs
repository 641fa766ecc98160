//! Daily price history for a single coin from CoinGecko.
//!
//! The crate fetches the market chart (price, market cap, volume) and the OHLC
//! candles, joins both by UTC calendar day into [`DailyRecord`]s and writes
//! them to a CSV file through a [`DataSink`](io::sink::DataSink).

pub mod config;
pub mod errors;
pub mod ingest;
pub mod io;
pub mod join;
pub mod models;
pub mod providers;

pub use errors::IngestError;
pub use models::daily_record::DailyRecord;
