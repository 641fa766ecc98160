use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use shared_utils::env::get_env_var;
use snafu::ResultExt;

use crate::{
    config::CoinConfig,
    models::{
        market_chart::{Candle, MarketChart},
        request_params::MarketDataParams,
    },
    providers::{
        ClientBuildSnafu, DataProvider, MissingEnvVarSnafu, ProviderError, ProviderInitError,
        ReqwestSnafu,
        coingecko::{
            params::{API_KEY_PARAM, market_chart_query, ohlc_query},
            response::{MarketChartResponse, OhlcResponse, candles},
        },
        error_for_status,
    },
};

pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl CoinGeckoProvider {
    /// Creates a new CoinGecko provider.
    ///
    /// Reads the demo API key from the environment variable named by
    /// `config.api_key_env` (`COIN_GECKO` by default).
    pub fn new(config: &CoinConfig) -> Result<Self, ProviderInitError> {
        let api_key = get_env_var(&config.api_key_env).context(MissingEnvVarSnafu)?;
        Self::with_key(config, SecretString::new(api_key.into()))
    }

    /// Creates a provider with an explicit key, for tests and alternative secret stores.
    pub fn with_key(config: &CoinConfig, api_key: SecretString) -> Result<Self, ProviderInitError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        mut query: Vec<(&'static str, String)>,
    ) -> Result<T, ProviderError> {
        query.push((API_KEY_PARAM, self.api_key.expose_secret().to_string()));
        tracing::debug!(url, "requesting");

        let response = self.client.get(url).query(&query).send().await.context(ReqwestSnafu)?;
        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }
        response.json::<T>().await.context(ReqwestSnafu)
    }
}

#[async_trait]
impl DataProvider for CoinGeckoProvider {
    async fn fetch_market_chart(
        &self,
        params: &MarketDataParams,
    ) -> Result<MarketChart, ProviderError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, params.coin_id);
        let body: MarketChartResponse = self.get_json(&url, market_chart_query(params)).await?;
        Ok(body.into())
    }

    async fn fetch_ohlc(&self, params: &MarketDataParams) -> Result<Vec<Candle>, ProviderError> {
        let url = format!("{}/coins/{}/ohlc", self.base_url, params.coin_id);
        let body: OhlcResponse = self.get_json(&url, ohlc_query(params)).await?;
        Ok(candles(body))
    }
}
