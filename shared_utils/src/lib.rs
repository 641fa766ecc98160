//! Small building blocks shared by the pipeline binaries: environment and
//! TOML configuration access, the in-memory CSV [`table::Table`], calendar
//! date parsing, request pacing and tracing setup.

pub mod config;
pub mod dates;
pub mod env;
pub mod pacing;
pub mod table;
pub mod telemetry;
