use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared_utils::{config::load_or_default, pacing::RequestPacer, telemetry::init_tracing};
use social_collector::{
    config::CollectorConfig,
    output::{write_reddit_csv, write_twitter_csv},
    providers::{reddit::RedditClient, twitter::TwitterClient},
    reddit::collect_posts,
    twitter::collect_tweets,
};

#[derive(Parser)]
#[command(version, about = "Collect Reddit posts or tweets into CSV files")]
struct Cli {
    /// Optional TOML file with [reddit] and [twitter] sections
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seconds to wait between requests
    #[arg(long)]
    delay: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search subreddits for a keyword and save posts with their top comments
    Reddit {
        #[arg(long)]
        keyword: Option<String>,
        /// Repeat to search several subreddits
        #[arg(long = "subreddit")]
        subreddits: Vec<String>,
        /// Maximum posts per subreddit
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Page through recent tweets matching a query
    Twitter {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        max_tweets: Option<usize>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut cfg: CollectorConfig = load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Reddit {
            keyword,
            subreddits,
            limit,
            output,
        } => {
            let reddit = &mut cfg.reddit;
            if let Some(keyword) = keyword {
                reddit.keyword = keyword;
            }
            if !subreddits.is_empty() {
                reddit.subreddits = subreddits;
            }
            reddit.limit = limit.or(reddit.limit);
            if let Some(output) = output {
                reddit.output = output;
            }
            if let Some(delay) = cli.delay {
                reddit.request_delay_secs = delay;
            }

            let client = RedditClient::connect(reddit).await.inspect_err(|err| {
                tracing::error!(error = %err, "cannot authenticate with Reddit");
            })?;
            let pacer = RequestPacer::new(reddit.request_delay());
            let collected = collect_posts(&client, reddit, &pacer).await;
            for (subreddit, posts) in &collected.per_subreddit {
                tracing::info!(subreddit = %subreddit, posts, "subreddit done");
            }

            write_reddit_csv(&reddit.output, &collected.posts, reddit.comments)
                .with_context(|| format!("writing {}", reddit.output.display()))?;
        }
        Command::Twitter {
            query,
            max_tweets,
            output,
        } => {
            let twitter = &mut cfg.twitter;
            if let Some(query) = query {
                twitter.query = query;
            }
            if let Some(max) = max_tweets {
                twitter.max_tweets = max;
            }
            if let Some(output) = output {
                twitter.output = output;
            }
            if let Some(delay) = cli.delay {
                twitter.request_delay_secs = delay;
            }

            let client = TwitterClient::new(twitter).inspect_err(|err| {
                tracing::error!(error = %err, "cannot create Twitter client");
            })?;
            let pacer = RequestPacer::new(twitter.request_delay());
            let collected = collect_tweets(&client, twitter, &pacer).await;

            if collected.items.is_empty() {
                tracing::warn!("no tweets collected; nothing written");
                return Ok(());
            }
            write_twitter_csv(&twitter.output, &collected.items)
                .with_context(|| format!("writing {}", twitter.output.display()))?;
        }
    }
    Ok(())
}
