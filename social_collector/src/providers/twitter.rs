//! Twitter API v2 recent search.

pub mod client;
pub mod response;

pub use client::TwitterClient;
