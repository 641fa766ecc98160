//! Reddit and Twitter post collection into flat CSV files.
//!
//! Both collectors walk cursor-paged APIs through [`paging::collect_pages`],
//! one request at a time, spaced by a [`RequestPacer`](shared_utils::pacing::RequestPacer).

pub mod config;
pub mod models;
pub mod output;
pub mod paging;
pub mod providers;
pub mod reddit;
pub mod twitter;
