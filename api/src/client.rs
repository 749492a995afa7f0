//! The Metal Price API client.
//!
//! A single endpoint is used: `latest`, queried with the base currency and
//! one metal code. The response keys each rate by the concatenation of base
//! and code, e.g. `INRXAU`.
//!
//! Note: the free tier of this API does not serve historical data, so there
//! is nothing here beyond the current spot price.

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::config::PriceApiConfig;
use crate::error::FetchError;
use crate::quote::PriceQuote;

const LATEST_URL: &str = "https://api.metalpriceapi.com/v1/latest";

/// The JSON shape of the `latest` endpoint. Fields beyond the rates map and
/// the optional observation timestamp are ignored.
#[derive(Debug, Deserialize)]
struct LatestRates {
    #[serde(default)]
    rates: HashMap<String, f64>,
    /// Unix timestamp of the quote, when the API provides one.
    timestamp: Option<i64>,
}

/// A thin client over the Metal Price API.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared. One instance
/// is provided to the whole app via Dioxus context.
#[derive(Debug, Clone)]
pub struct PriceClient {
    client: reqwest::Client,
    config: PriceApiConfig,
}

impl PriceClient {
    pub fn new(config: PriceApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The currency quotes are requested in.
    pub fn base_currency(&self) -> &str {
        &self.config.base_currency
    }

    /// Fetches the current spot price for `code`.
    ///
    /// The code is sent to the API verbatim, so it does not have to be one
    /// of the catalog metals. No retry and no explicit timeout; the caller
    /// decides whether and when to try again.
    pub async fn latest_quote(&self, code: &str) -> Result<PriceQuote, FetchError> {
        let response = self
            .client
            .get(LATEST_URL)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("base", self.config.base_currency.as_str()),
                ("currencies", code),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        check_status(response.status())?;

        let body: LatestRates = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        quote_from_rates(&self.config.base_currency, code, &body)
    }
}

/// Rejects non-success HTTP statuses as network failures.
fn check_status(status: reqwest::StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Network(format!("server returned {status}")))
    }
}

/// Extracts the quote for `code` from a decoded response body.
///
/// The rate lives under the `{base}{code}` key. A missing key, or a rate
/// that is not a positive number, means the API had nothing for us.
fn quote_from_rates(base: &str, code: &str, body: &LatestRates) -> Result<PriceQuote, FetchError> {
    let key = format!("{base}{code}");
    let price = body
        .rates
        .get(&key)
        .copied()
        .filter(|rate| *rate > 0.0)
        .ok_or(FetchError::NoData)?;

    let observed_at = body
        .timestamp
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    Ok(PriceQuote {
        code: code.to_owned(),
        base: base.to_owned(),
        price,
        observed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: serde_json::Value) -> LatestRates {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn quote_is_keyed_by_base_and_code() {
        let body = body(serde_json::json!({
            "rates": { "INRXAU": 1234.5 },
            "timestamp": 1_700_000_000,
        }));

        let quote = quote_from_rates("INR", "XAU", &body).unwrap();
        assert_eq!(quote.price, 1234.5);
        assert_eq!(quote.code, "XAU");
        assert_eq!(quote.base, "INR");
        assert_eq!(
            quote.observed_at,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap()
        );
    }

    #[test]
    fn missing_rate_key_is_no_data() {
        let body = body(serde_json::json!({
            "rates": { "INRXAG": 25.0 },
            "timestamp": 1_700_000_000,
        }));

        assert_eq!(quote_from_rates("INR", "XAU", &body), Err(FetchError::NoData));
    }

    #[test]
    fn non_positive_rate_is_no_data() {
        let body = body(serde_json::json!({ "rates": { "INRXAU": 0.0 } }));
        assert_eq!(quote_from_rates("INR", "XAU", &body), Err(FetchError::NoData));
    }

    #[test]
    fn empty_body_is_no_data() {
        let body = body(serde_json::json!({}));
        assert_eq!(quote_from_rates("INR", "XAU", &body), Err(FetchError::NoData));
    }

    #[test]
    fn missing_timestamp_falls_back_to_fetch_time() {
        let before = Utc::now();
        let body = body(serde_json::json!({ "rates": { "USDXPT": 900.25 } }));

        let quote = quote_from_rates("USD", "XPT", &body).unwrap();
        assert!(quote.observed_at >= before);
        assert!(quote.observed_at <= Utc::now());
    }

    #[test]
    fn non_success_status_is_a_network_error() {
        assert!(check_status(reqwest::StatusCode::OK).is_ok());

        let err = check_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR).unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.to_string().is_empty());
    }
}
