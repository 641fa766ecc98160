use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::tweet::Tweet;

/// `/tweets/search/recent` body with `author_id` and `attachments.media_keys` expansions.
#[derive(Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<TweetData>,
    #[serde(default)]
    pub includes: Includes,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Deserialize, Debug)]
pub struct TweetData {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub public_metrics: TweetMetrics,
    #[serde(default)]
    pub entities: Option<Entities>,
    #[serde(default)]
    pub attachments: Option<Attachments>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TweetMetrics {
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub impression_count: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Entities {
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
}

#[derive(Deserialize, Debug)]
pub struct Hashtag {
    pub tag: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct Attachments {
    #[serde(default)]
    pub media_keys: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public_metrics: Option<UserMetrics>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UserMetrics {
    #[serde(default)]
    pub followers_count: u64,
}

#[derive(Deserialize, Debug)]
pub struct Media {
    pub media_key: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Meta {
    #[serde(default)]
    pub result_count: u64,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl SearchResponse {
    /// Resolves expansions into flat [`Tweet`]s. Unknown authors get an empty name and no
    /// followers.
    pub fn into_tweets(self) -> Vec<Tweet> {
        let users: HashMap<&str, &User> =
            self.includes.users.iter().map(|u| (u.id.as_str(), u)).collect();
        let photos: HashMap<&str, &str> = self
            .includes
            .media
            .iter()
            .filter(|m| m.kind == "photo")
            .filter_map(|m| Some((m.media_key.as_str(), m.url.as_deref()?)))
            .collect();

        self.data
            .into_iter()
            .map(|t| {
                let author = t.author_id.as_deref().and_then(|id| users.get(id));
                let media = t
                    .attachments
                    .iter()
                    .flat_map(|a| &a.media_keys)
                    .find_map(|key| photos.get(key.as_str()))
                    .map(|url| url.to_string());
                Tweet {
                    user_name: author.map(|u| u.name.clone()).unwrap_or_default(),
                    followers_count: author
                        .and_then(|u| u.public_metrics.as_ref())
                        .map_or(0, |m| m.followers_count),
                    reply_count: t.public_metrics.reply_count,
                    view_count: t.public_metrics.impression_count,
                    favorite_count: t.public_metrics.like_count,
                    hashtags: t
                        .entities
                        .map(|e| e.hashtags.into_iter().map(|h| h.tag).collect())
                        .unwrap_or_default(),
                    media,
                    id: t.id,
                    text: t.text,
                    created_at: t.created_at,
                }
            })
            .collect()
    }
}
