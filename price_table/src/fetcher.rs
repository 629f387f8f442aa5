//! Fetching spot prices from the price API.
//!
//! One blocking GET per run; there is no retry and no caching. Any transport
//! failure or non-success status is handed back to `main` as a `PriceError`.
use chrono::Utc;
use log::{debug, info};
use price_common::api::price_url;
use price_common::price::SimplePriceResponse;
use price_common::{Coin, Currency, PriceBoard, PriceError, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a configured HTTP client and the API base URL.
pub struct PriceFetcher {
    client: Client,
    base_url: String,
}

impl PriceFetcher {
    /// Builds a fetcher talking to `base_url` with the given request timeout.
    ///
    /// `base_url` must be an absolute `http` or `https` URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| PriceError::Format(format!("invalid API URL {:?}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PriceError::Format(format!(
                "unsupported scheme in API URL {:?}",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Requests the prices of `coins` in `currencies` and lays them out as a board.
    pub fn fetch(&self, coins: &[Coin], currencies: &[Currency]) -> Result<PriceBoard> {
        let url = price_url(&self.base_url, coins, currencies);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text() {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to read body of {} response: {}", status, e);
                    String::new()
                }
            };
            return Err(PriceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes()?;
        let decoded = SimplePriceResponse::from_slice(&body)?;
        let fetched_at = Utc::now();
        info!(
            "Received prices for {} of {} coins",
            decoded.0.len(),
            coins.len()
        );

        Ok(PriceBoard::from_response(
            coins, currencies, &decoded, fetched_at,
        ))
    }
}
