use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coin_data_ingestor::{
    IngestError,
    config::CoinConfig,
    ingest::ingest,
    io::csv_sink::CsvSink,
    models::request_params::MarketDataParams,
    providers::{ProviderError, coingecko::CoinGeckoProvider},
};
use shared_utils::{config::load_or_default, pacing::RequestPacer, telemetry::init_tracing};

#[derive(Parser)]
#[command(version, about = "Fetch daily market data for a coin from CoinGecko")]
struct Cli {
    /// Optional TOML file with fetcher settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CoinGecko coin id (e.g. "bitcoin")
    #[arg(long)]
    coin: Option<String>,

    /// Days of history to request
    #[arg(long)]
    days: Option<u32>,

    /// Seconds to wait after each request
    #[arg(long)]
    delay: Option<u64>,

    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Leave the CSV without the next_day_movement column
    #[arg(long)]
    skip_movement: bool,
}

impl Cli {
    fn apply(&self, cfg: &mut CoinConfig) {
        if let Some(coin) = &self.coin {
            cfg.coin_id = coin.clone();
        }
        if let Some(days) = self.days {
            cfg.days = days;
        }
        if let Some(delay) = self.delay {
            cfg.request_delay_secs = delay;
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
    }
}

fn log_hint(err: &IngestError) {
    match err {
        IngestError::Provider(ProviderError::Unauthorized { .. }) => {
            tracing::error!("check that the API key is set, valid and allowed to use this endpoint")
        }
        IngestError::Provider(ProviderError::RateLimited { .. }) => {
            tracing::error!("rate limit hit; wait a minute or raise --delay")
        }
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg: CoinConfig = load_or_default(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    let provider = match CoinGeckoProvider::new(&cfg) {
        Ok(provider) => provider,
        Err(err) => {
            tracing::error!(error = %err, "cannot create CoinGecko provider");
            return Err(err).context("no API key, nothing fetched");
        }
    };

    let sink = CsvSink::new(&cfg.output_dir);
    let params = MarketDataParams::from(&cfg);
    let pacer = RequestPacer::new(cfg.request_delay());

    let path = match ingest(&provider, &sink, &params, &pacer).await {
        Ok(path) => path,
        Err(err) => {
            tracing::error!(error = %err, coin = %cfg.coin_id, "fetch failed; no file written");
            log_hint(&err);
            return Err(err.into());
        }
    };

    if !cli.skip_movement {
        training_data::movement::label_file(&path, &path, "date", "price")
            .with_context(|| format!("labeling movements in {}", path.display()))?;
        tracing::info!(path = %path.display(), "next_day_movement column added");
    }
    Ok(())
}
