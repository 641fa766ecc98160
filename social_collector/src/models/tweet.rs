//! One tweet with its author and engagement counts, as written to the Twitter CSV.

use chrono::{DateTime, Utc};
use shared_utils::dates::TWITTER_TIMESTAMP_FORMAT;

pub const HEADER: [&str; 10] = [
    "tweet_id",
    "user_name",
    "tweet_text",
    "tweet_created_at",
    "tweet_reply_count",
    "tweet_view_count",
    "tweet_favorite_count",
    "user_followers_count",
    "hashtags",
    "media",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Tweet {
    pub id: String,
    pub user_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub reply_count: u64,
    /// Impression count; only visible to some API tiers.
    pub view_count: Option<u64>,
    pub favorite_count: u64,
    pub followers_count: u64,
    pub hashtags: Vec<String>,
    /// URL of the first attached photo.
    pub media: Option<String>,
}

impl Tweet {
    /// Row in [`HEADER`] order. The timestamp uses the classic Twitter layout.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user_name.clone(),
            self.text.clone(),
            self.created_at.format(TWITTER_TIMESTAMP_FORMAT).to_string(),
            self.reply_count.to_string(),
            self.view_count.map(|v| v.to_string()).unwrap_or_default(),
            self.favorite_count.to_string(),
            self.followers_count.to_string(),
            self.hashtags.join(" "),
            self.media.clone().unwrap_or_default(),
        ]
    }
}
