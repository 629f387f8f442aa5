//! Decoded price API response and the rows of the price table.
//!
//! The simple price endpoint answers with an object keyed by coin id, each
//! holding an object keyed by currency code:
//!
//! ```json
//! { "bitcoin": { "usd": 67000.0, "eur": 61800.0, "gbp": 52900.0 } }
//! ```
//!
//! Unknown coin ids are silently left out of the response, so every lookup here
//! is optional.
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

use crate::currency::Currency;
use crate::tickers::Coin;

/// Number of significant digits shown for a price.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Raw body of the simple price endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SimplePriceResponse(pub HashMap<String, HashMap<String, Option<f64>>>);

impl SimplePriceResponse {
    /// Decodes a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Price of `coin` in `currency`, if the API returned one.
    pub fn price(&self, coin: &Coin, currency: Currency) -> Option<f64> {
        self.0
            .get(coin.id())
            .and_then(|quotes| quotes.get(currency.code()))
            .copied()
            .flatten()
    }
}

/// Prices of one coin, one cell per selected currency.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    /// Coin the row belongs to.
    pub coin: Coin,
    /// Prices in column order; `None` where the API had no value.
    pub prices: Vec<Option<f64>>,
}

impl PriceRow {
    /// `true` when the API returned no price at all for this coin.
    pub fn is_empty(&self) -> bool {
        self.prices.iter().all(Option::is_none)
    }
}

/// Everything needed to render the price table.
#[derive(Debug, Clone)]
pub struct PriceBoard {
    /// Column order.
    pub currencies: Vec<Currency>,
    /// One row per requested coin, in coin list order.
    pub rows: Vec<PriceRow>,
    /// When the response was received.
    pub fetched_at: DateTime<Utc>,
}

impl PriceBoard {
    /// Lays out `response` as one row per entry of `coins` and one column per
    /// entry of `currencies`.
    pub fn from_response(
        coins: &[Coin],
        currencies: &[Currency],
        response: &SimplePriceResponse,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let rows = coins
            .iter()
            .map(|coin| PriceRow {
                coin: coin.clone(),
                prices: currencies
                    .iter()
                    .map(|currency| response.price(coin, *currency))
                    .collect(),
            })
            .collect();

        PriceBoard {
            currencies: currencies.to_vec(),
            rows,
            fetched_at,
        }
    }

    /// Coins for which the API returned no price in any selected currency.
    pub fn missing_coins(&self) -> Vec<&Coin> {
        self.rows
            .iter()
            .filter(|row| row.is_empty())
            .map(|row| &row.coin)
            .collect()
    }
}

/// Formats a price with six significant digits in fixed notation, trimming
/// trailing zeros. Whole units are kept for prices of 100000 and above.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coins(ids: &[&str]) -> Vec<Coin> {
        ids.iter().map(|id| id.parse().unwrap()).collect()
    }

    fn sample_response() -> SimplePriceResponse {
        SimplePriceResponse::from_slice(
            br#"{
                "bitcoin": {"usd": 67012.5, "eur": 61800, "gbp": 52900.25},
                "ethereum": {"usd": 3500.1, "gbp": null}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_board_follows_coin_and_currency_order() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let board = PriceBoard::from_response(
            &coins(&["ethereum", "bitcoin"]),
            &[Currency::Gbp, Currency::Usd],
            &sample_response(),
            at,
        );

        assert_eq!(board.rows[0].coin.id(), "ethereum");
        assert_eq!(board.rows[0].prices, vec![None, Some(3500.1)]);
        assert_eq!(board.rows[1].prices, vec![Some(52900.25), Some(67012.5)]);
        assert_eq!(board.fetched_at, at);
    }

    #[test]
    fn test_unknown_coin_is_reported_missing() {
        let board = PriceBoard::from_response(
            &coins(&["bitcoin", "notacoin"]),
            &Currency::DEFAULT,
            &sample_response(),
            Utc::now(),
        );

        assert_eq!(board.rows.len(), 2);
        assert_eq!(board.rows[1].prices, vec![None, None, None]);
        let missing: Vec<&str> = board.missing_coins().iter().map(|c| c.id()).collect();
        assert_eq!(missing, ["notacoin"]);
    }

    #[test]
    fn test_empty_response_object() {
        let response = SimplePriceResponse::from_slice(b"{}").unwrap();
        assert_eq!(response.price(&"bitcoin".parse().unwrap(), Currency::Usd), None);
    }

    #[test]
    fn test_rejects_non_object_body() {
        assert!(SimplePriceResponse::from_slice(b"[1, 2, 3]").is_err());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(43521.5), "43521.5");
        assert_eq!(format_price(1.05), "1.05");
        assert_eq!(format_price(0.5), "0.5");
        assert_eq!(format_price(0.000123456789), "0.000123457");
        assert_eq!(format_price(1234567.89), "1234568");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(-2.5), "-2.5");
    }
}
