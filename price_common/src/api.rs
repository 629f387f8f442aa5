//! Price API endpoint constants and helpers.

use crate::currency::Currency;
use crate::tickers::Coin;

/// Base URL of the public CoinGecko v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Path of the simple spot price endpoint, relative to the base URL.
pub const SIMPLE_PRICE_PATH: &str = "simple/price";

/// Builds the spot price URL for `coins` quoted in `currencies`, e.g.
/// `https://api.coingecko.com/api/v3/simple/price?ids=bitcoin,ethereum&vs_currencies=usd,eur,gbp`.
///
/// Coin ids are restricted to URL-safe characters when parsed, so they are
/// joined without further escaping.
pub fn price_url(base: &str, coins: &[Coin], currencies: &[Currency]) -> String {
    let ids: Vec<&str> = coins.iter().map(Coin::id).collect();
    let codes: Vec<&str> = currencies.iter().map(Currency::code).collect();
    format!(
        "{}/{}?ids={}&vs_currencies={}",
        base.trim_end_matches('/'),
        SIMPLE_PRICE_PATH,
        ids.join(","),
        codes.join(",")
    )
}
