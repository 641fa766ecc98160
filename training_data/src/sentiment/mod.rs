//! Lexicon-based sentiment scoring and engagement weighting of social posts.

mod analyzer;
mod labeler;
mod lexicon;

pub use analyzer::LexiconAnalyzer;
pub use labeler::{
    FINAL_WEIGHTED_SCORE, FOLLOWER_INFLUENCE_SCORE, LabelColumns, LabelSummary, SENTIMENT_SCORE,
    WEIGHTED_FAVORITE_SCORE, follower_influence, label_file, label_table, parse_count,
};

/// A polarity model that maps text to a compound score in `[-1.0, 1.0]`.
pub trait SentimentModel {
    /// Scores `text`; empty or whitespace-only text scores exactly `0.0`.
    fn compound(&self, text: &str) -> f64;
}
