pub mod csv_sink;
pub mod sink;
