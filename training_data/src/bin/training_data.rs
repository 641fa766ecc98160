use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shared_utils::{config::load_or_default, telemetry::init_tracing};
use training_data::{
    config::PipelineConfig,
    filter::filter_file,
    merge::{MergeMode, merge_files},
    movement,
    normalize::normalize_file,
    sentiment,
};

#[derive(Parser)]
#[command(version, about = "Label, normalize and merge pipeline CSV files")]
struct Cli {
    /// Optional TOML file with pipeline settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Coin name used in the default file names (e.g. "bitcoin")
    #[arg(long)]
    coin: Option<String>,

    /// Directory holding coin_data/, reddit_data/, twitter_data/ and training_data/
    #[arg(long, value_name = "DIR")]
    data_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Source {
    Twitter,
    Reddit,
}

#[derive(Subcommand)]
enum Command {
    /// Score post text and add engagement-weighted sentiment columns
    Label {
        #[arg(long, value_enum, default_value = "twitter")]
        source: Source,
        #[arg(long)]
        input: Option<PathBuf>,
        /// Defaults to overwriting the input
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rewrite raw tweet timestamps into a leading M/D/YYYY Date column
    Normalize {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Join per-day Reddit and Twitter sentiment onto the coin series
    Merge {
        #[arg(long)]
        output: Option<PathBuf>,
        /// Add to existing sentiment columns instead of replacing them
        #[arg(long)]
        additive: bool,
    },
    /// Add the next_day_movement label to a price series
    Movement {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Keep only rows mentioning a keyword (in place)
    Filter {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        keyword: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg: PipelineConfig = load_or_default(cli.config.as_deref())?;
    if let Some(coin) = cli.coin {
        cfg.coin = coin;
    }
    if let Some(root) = cli.data_root {
        cfg.data_root = root;
    }

    match cli.command {
        Command::Label { source, input, output } => {
            let (default_input, columns) = match source {
                Source::Twitter => (cfg.twitter_csv(), &cfg.twitter_columns),
                Source::Reddit => (cfg.reddit_csv(), &cfg.reddit_columns),
            };
            let input = input.unwrap_or(default_input);
            let output = output.unwrap_or_else(|| input.clone());
            sentiment::label_file(&input, &output, columns, &cfg.analyzer())
                .with_context(|| format!("sentiment labeling of {} failed", input.display()))?;
        }
        Command::Normalize { input, output } => {
            let input = input.unwrap_or_else(|| cfg.twitter_csv());
            let output = output.unwrap_or_else(|| input.clone());
            normalize_file(&input, &output, &cfg.normalize)
                .with_context(|| format!("date normalization of {} failed", input.display()))?;
        }
        Command::Merge { output, additive } => {
            let mut merge = cfg.merge_config();
            if let Some(output) = output {
                merge.output = output;
            }
            if additive {
                merge.mode = MergeMode::Additive;
            }
            merge_files(&merge).context("merge failed")?;
        }
        Command::Movement { input, output } => {
            let input = input.unwrap_or_else(|| cfg.training_csv());
            let output = output.unwrap_or_else(|| input.clone());
            movement::label_file(&input, &output, &cfg.date_column, &cfg.price_column)
                .with_context(|| format!("movement labeling of {} failed", input.display()))?;
        }
        Command::Filter { input, keyword } => {
            let input = input.unwrap_or_else(|| cfg.reddit_csv());
            let keyword = keyword.unwrap_or_else(|| cfg.filter_keyword().to_string());
            filter_file(&input, &keyword)
                .with_context(|| format!("keyword filter of {} failed", input.display()))?;
        }
    }

    Ok(())
}
