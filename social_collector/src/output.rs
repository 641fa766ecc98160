//! CSV output of collected posts.

use std::path::Path;

use shared_utils::table::{Table, TableError};

use crate::models::{
    reddit_post::RedditPost,
    tweet::{self, Tweet},
};

/// Writes posts with `comment_count` comment columns, replacing `path`.
pub fn write_reddit_csv(
    path: &Path,
    posts: &[RedditPost],
    comment_count: usize,
) -> Result<(), TableError> {
    let table = Table::new(
        RedditPost::header(comment_count),
        posts.iter().map(|p| p.to_row(comment_count)).collect(),
    );
    table.write_csv(path)?;
    tracing::info!(path = %path.display(), rows = posts.len(), "reddit posts written");
    Ok(())
}

pub fn write_twitter_csv(path: &Path, tweets: &[Tweet]) -> Result<(), TableError> {
    let table = Table::new(
        tweet::HEADER.map(String::from).to_vec(),
        tweets.iter().map(Tweet::to_row).collect(),
    );
    table.write_csv(path)?;
    tracing::info!(path = %path.display(), rows = tweets.len(), "tweets written");
    Ok(())
}
