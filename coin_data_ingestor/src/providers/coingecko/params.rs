use crate::models::request_params::MarketDataParams;

/// Query parameter carrying the demo API key.
pub const API_KEY_PARAM: &str = "x_cg_demo_api_key";

/// Query for `/coins/{id}/market_chart`, daily granularity.
pub fn market_chart_query(params: &MarketDataParams) -> Vec<(&'static str, String)> {
    vec![
        ("vs_currency", params.vs_currency.clone()),
        ("days", params.days.to_string()),
        ("interval", "daily".to_string()),
    ]
}

/// Query for `/coins/{id}/ohlc`.
pub fn ohlc_query(params: &MarketDataParams) -> Vec<(&'static str, String)> {
    vec![
        ("vs_currency", params.vs_currency.clone()),
        ("days", params.days.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_query_requests_daily_interval() {
        let params = MarketDataParams {
            coin_id: "bitcoin".into(),
            vs_currency: "usd".into(),
            days: 365,
        };
        let query = market_chart_query(&params);
        assert!(query.contains(&("interval", "daily".to_string())));
        assert!(query.contains(&("days", "365".to_string())));
        assert_eq!(ohlc_query(&params).len(), 2);
    }
}
