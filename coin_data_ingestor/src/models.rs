pub mod daily_record;
pub mod market_chart;
pub mod request_params;
