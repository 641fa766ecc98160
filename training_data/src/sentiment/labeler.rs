use std::path::Path;

use serde::{Deserialize, Serialize};
use shared_utils::table::Table;

use super::SentimentModel;
use crate::errors::PipelineError;

pub const SENTIMENT_SCORE: &str = "sentiment_score";
pub const WEIGHTED_FAVORITE_SCORE: &str = "weighted_favorite_score";
pub const FOLLOWER_INFLUENCE_SCORE: &str = "follower_influence_score";
pub const FINAL_WEIGHTED_SCORE: &str = "final_weighted_score";

/// Which input columns feed the labeler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelColumns {
    /// Text columns, joined with a space before scoring.
    pub text: Vec<String>,
    /// Engagement count that scales the raw sentiment.
    pub favorites: Option<String>,
    /// Author reach, damped with `ln(1 + x)`.
    pub followers: Option<String>,
}

impl LabelColumns {
    /// Columns written by the Twitter collector.
    pub fn twitter() -> Self {
        Self {
            text: vec!["tweet_text".to_string()],
            favorites: Some("tweet_favorite_count".to_string()),
            followers: Some("user_followers_count".to_string()),
        }
    }

    /// Columns written by the Reddit collector. Posts have no follower count.
    pub fn reddit() -> Self {
        Self {
            text: vec!["Post Title".to_string(), "Post Description".to_string()],
            favorites: Some("Score".to_string()),
            followers: None,
        }
    }
}

impl Default for LabelColumns {
    fn default() -> Self {
        Self::twitter()
    }
}

/// What [`label_table`] did, for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSummary {
    pub rows: usize,
    pub mean_sentiment: f64,
    pub favorites_found: bool,
    pub followers_found: bool,
}

/// Parses an engagement count; anything non-numeric counts as zero.
pub fn parse_count(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// `ln(1 + followers)`, so accounts with no followers weigh zero.
pub fn follower_influence(followers: f64) -> f64 {
    followers.ln_1p()
}

fn optional_column(table: &Table, name: Option<&str>, what: &str) -> Option<usize> {
    let name = name?;
    let idx = table.column_index(name);
    if idx.is_none() {
        tracing::warn!(column = name, "{what} column not found; using its neutral default");
    }
    idx
}

/// Adds the four sentiment columns to `table`, replacing them if present.
///
/// - `sentiment_score`: compound polarity of the joined text columns.
/// - `weighted_favorite_score`: `sentiment_score * favorites`, or just
///   `sentiment_score` when the favorites column is absent.
/// - `follower_influence_score`: `ln(1 + followers)`, or `1` when the
///   followers column is absent.
/// - `final_weighted_score`: product of the previous two.
///
/// A missing favorites column defaults the multiplier to 1 while an
/// unparseable favorites cell counts as 0. Both defaults are kept as they
/// are because downstream training data was produced with them.
pub fn label_table(
    table: &mut Table,
    columns: &LabelColumns,
    model: &dyn SentimentModel,
) -> Result<LabelSummary, PipelineError> {
    let text_idx = columns
        .text
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| PipelineError::missing_column(name, "sentiment input"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let fav_idx = optional_column(table, columns.favorites.as_deref(), "favorites");
    let follower_idx = optional_column(table, columns.followers.as_deref(), "followers");

    let n = table.len();
    let mut sentiment = Vec::with_capacity(n);
    let mut weighted = Vec::with_capacity(n);
    let mut influence = Vec::with_capacity(n);
    let mut final_score = Vec::with_capacity(n);
    let mut total = 0.0;

    for row in table.rows() {
        let text = text_idx
            .iter()
            .map(|&i| row[i].as_str())
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let score = model.compound(&text);
        let fav_weighted = match fav_idx {
            Some(i) => score * parse_count(&row[i]),
            None => score,
        };
        let reach = match follower_idx {
            Some(i) => follower_influence(parse_count(&row[i])),
            None => 1.0,
        };

        total += score;
        sentiment.push(score.to_string());
        weighted.push(fav_weighted.to_string());
        influence.push(reach.to_string());
        final_score.push((fav_weighted * reach).to_string());
    }

    table.set_column(SENTIMENT_SCORE, sentiment)?;
    table.set_column(WEIGHTED_FAVORITE_SCORE, weighted)?;
    table.set_column(FOLLOWER_INFLUENCE_SCORE, influence)?;
    table.set_column(FINAL_WEIGHTED_SCORE, final_score)?;

    Ok(LabelSummary {
        rows: n,
        mean_sentiment: if n == 0 { 0.0 } else { total / n as f64 },
        favorites_found: fav_idx.is_some(),
        followers_found: follower_idx.is_some(),
    })
}

/// Reads `input`, labels it and writes the result to `output` (which may be the same file).
pub fn label_file(
    input: &Path,
    output: &Path,
    columns: &LabelColumns,
    model: &dyn SentimentModel,
) -> Result<LabelSummary, PipelineError> {
    let mut table = Table::read_csv(input)?;
    tracing::info!(path = %input.display(), rows = table.len(), "scoring sentiment");

    let summary = label_table(&mut table, columns, model)?;
    table.write_csv(output)?;

    tracing::info!(
        path = %output.display(),
        rows = summary.rows,
        mean_sentiment = summary.mean_sentiment,
        "sentiment scores written"
    );
    Ok(summary)
}
