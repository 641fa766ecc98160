//! Typed configuration for the `training-data` binary.
//!
//! File locations follow the fixed directory layout shared by all pipeline
//! programs: `coin_data/`, `reddit_data/`, `twitter_data/` and
//! `training_data/` under `data_root`, with file names derived from `coin`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::merge::{MergeConfig, MergeMode, MergeSource};
use crate::normalize::NormalizeConfig;
use crate::sentiment::{LabelColumns, LexiconAnalyzer};

pub const REDDIT_SENTIMENT_COLUMN: &str = "reddit_sentiment_score";
pub const TWITTER_SENTIMENT_COLUMN: &str = "twitter_sentiment_score";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub coin: String,
    pub data_root: PathBuf,
    /// Date and price columns of the coin CSV.
    pub date_column: String,
    pub price_column: String,
    pub twitter_columns: LabelColumns,
    pub reddit_columns: LabelColumns,
    /// Extra or overriding lexicon valences, e.g. `ngmi = -2.0`.
    pub lexicon: BTreeMap<String, f64>,
    pub normalize: NormalizeConfig,
    pub merge_mode: MergeMode,
    /// Keyword for the Reddit filter; defaults to the coin name.
    pub filter_keyword: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            coin: "bitcoin".to_string(),
            data_root: PathBuf::from("."),
            date_column: "date".to_string(),
            price_column: "price".to_string(),
            twitter_columns: LabelColumns::twitter(),
            reddit_columns: LabelColumns::reddit(),
            lexicon: BTreeMap::new(),
            normalize: NormalizeConfig::default(),
            merge_mode: MergeMode::Replace,
            filter_keyword: None,
        }
    }
}

impl PipelineConfig {
    pub fn coin_csv(&self) -> PathBuf {
        self.data_root.join("coin_data").join(format!("{}_data.csv", self.coin))
    }

    pub fn reddit_csv(&self) -> PathBuf {
        self.data_root.join("reddit_data").join(format!("{}_reddit_data.csv", self.coin))
    }

    pub fn twitter_csv(&self) -> PathBuf {
        self.data_root.join("twitter_data").join(format!("{}_twitter_data.csv", self.coin))
    }

    pub fn training_csv(&self) -> PathBuf {
        self.data_root.join("training_data").join(format!("{}_final.csv", self.coin))
    }

    pub fn filter_keyword(&self) -> &str {
        self.filter_keyword.as_deref().unwrap_or(&self.coin)
    }

    /// Coin CSV as the main table, Reddit then Twitter sentiment joined onto it.
    pub fn merge_config(&self) -> MergeConfig {
        MergeConfig {
            main: self.coin_csv(),
            main_date_column: self.date_column.clone(),
            sources: vec![
                MergeSource::new(self.reddit_csv(), REDDIT_SENTIMENT_COLUMN),
                MergeSource::new(self.twitter_csv(), TWITTER_SENTIMENT_COLUMN),
            ],
            output: self.training_csv(),
            mode: self.merge_mode,
        }
    }

    pub fn analyzer(&self) -> LexiconAnalyzer {
        let mut analyzer = LexiconAnalyzer::new();
        analyzer.extend(self.lexicon.iter().map(|(word, valence)| (word, *valence)));
        analyzer
    }
}
