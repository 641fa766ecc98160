//! One Reddit submission with its top comments, as written to the Reddit CSV.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct RedditPost {
    pub subreddit: String,
    pub title: String,
    pub url: String,
    /// UTC day of creation.
    pub date: NaiveDate,
    pub score: i64,
    pub description: String,
    pub comments: Vec<String>,
}

/// Replaces line breaks with spaces and trims.
pub fn flatten_text(raw: &str) -> String {
    raw.trim().replace(['\r', '\n'], " ")
}

impl RedditPost {
    /// Header with exactly `comment_count` comment columns.
    pub fn header(comment_count: usize) -> Vec<String> {
        let mut header: Vec<String> = [
            "Subreddit",
            "Post Title",
            "Post URL",
            "Date",
            "Score",
            "Post Description",
        ]
        .map(String::from)
        .to_vec();
        header.extend((1..=comment_count).map(|i| format!("Comment {i}")));
        header
    }

    /// Row matching [`RedditPost::header`]; comments are padded or cut to `comment_count`.
    pub fn to_row(&self, comment_count: usize) -> Vec<String> {
        let mut row = vec![
            self.subreddit.clone(),
            self.title.clone(),
            self.url.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            self.score.to_string(),
            self.description.clone(),
        ];
        row.extend(
            self.comments
                .iter()
                .cloned()
                .chain(std::iter::repeat(String::new()))
                .take(comment_count),
        );
        row
    }
}
