//! Offline CSV steps that turn raw market and social data into training rows.
//!
//! Each step reads a file written by an earlier program, adds or rewrites a
//! few columns and writes the result back:
//!
//! - [`filter`]: keep rows that mention a keyword.
//! - [`normalize`]: rewrite raw tweet timestamps into a leading `Date` column.
//! - [`sentiment`]: score post text and weight it by engagement.
//! - [`merge`]: sum sentiment per day and left-join it onto the price series.
//! - [`movement`]: label each day with the direction of the next day's price.

pub mod config;
pub mod errors;
pub mod filter;
pub mod merge;
pub mod movement;
pub mod normalize;
pub mod sentiment;

pub use errors::PipelineError;
