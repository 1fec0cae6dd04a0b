use crate::domain::errors::ChartError;
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::market_data::{Bar, BarRepository, Timeframe};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

/// Default ticker shown by the screen.
pub const DEFAULT_TICKER: &str = "AAPL";

const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
// Fixed historical window; the upstream endpoint requires explicit dates.
const RANGE_FROM: &str = "2022-01-09";
const RANGE_TO: &str = "2023-02-10";
const MAX_RESULTS: u32 = 50_000;

/// Envelope of the aggregates endpoint; only `results` matters here.
#[derive(Debug, Deserialize)]
struct AggregatesResponse {
    #[serde(default)]
    results: Vec<Bar>,
}

/// REST client for the aggregates (OHLC bars) endpoint.
pub struct AggregatesRestClient {
    base_url: String,
    ticker: String,
    api_key: String,
}

impl AggregatesRestClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ticker: DEFAULT_TICKER.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `sort=desc` is the newest-first contract the viewport relies on.
    pub fn aggregates_url(&self, timeframe: Timeframe) -> String {
        format!(
            "{}/v2/aggs/ticker/{}/range/{}/{}/{}?adjusted=true&sort=desc&limit={}&apiKey={}",
            self.base_url,
            self.ticker,
            timeframe.query_fragment(),
            RANGE_FROM,
            RANGE_TO,
            MAX_RESULTS,
            self.api_key
        )
    }

    async fn fetch_bars(&self, timeframe: Timeframe) -> Result<Vec<Bar>, ChartError> {
        let url = self.aggregates_url(timeframe);
        get_logger().info(
            LogComponent::Infrastructure("AggregatesApi"),
            &format!("Fetching {} bars at {}", self.ticker, timeframe),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ChartError::Network(format!("request failed: {e:?}")))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChartError::Network(format!(
                "HTTP {}: {}",
                status,
                upstream_error_message(&body).unwrap_or_else(|| response.status_text())
            )));
        }

        let payload: AggregatesResponse = response
            .json()
            .await
            .map_err(|e| ChartError::Decode(format!("bad aggregates body: {e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("AggregatesApi"),
            &format!("Received {} bars", payload.results.len()),
        );

        Ok(payload.results)
    }
}

/// Pick the upstream `error` field out of a failure body, if any.
fn upstream_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error").and_then(|e| e.as_str()).map(str::to_string)
}

#[async_trait(?Send)]
impl BarRepository for AggregatesRestClient {
    async fn load_bars(&self, timeframe: Timeframe) -> Result<Vec<Bar>, ChartError> {
        self.fetch_bars(timeframe).await
    }
}
