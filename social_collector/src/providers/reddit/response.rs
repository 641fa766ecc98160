use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Reddit's generic `Listing` envelope.
#[derive(Deserialize, Debug)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Deserialize, Debug)]
pub struct ListingData<T> {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default = "Vec::new")]
    pub children: Vec<Thing<T>>,
}

#[derive(Deserialize, Debug)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

/// A link or self post (`t3`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: String,
    pub subreddit: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub selftext: String,
}

impl Submission {
    pub fn created_day(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp(self.created_utc as i64, 0).map(|dt| dt.date_naive())
    }
}

/// A comment (`t1`) or a `more` stub; only comments carry a body.
#[derive(Deserialize, Debug, Default)]
pub struct CommentData {
    #[serde(default)]
    pub body: Option<String>,
}

/// `/comments/{id}` answers with the post listing followed by the comment listing.
pub type CommentsResponse = (serde_json::Value, Listing<CommentData>);

#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}
