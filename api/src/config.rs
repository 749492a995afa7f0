//! Build-time configuration for the price API.

/// Credential and quoting currency for the Metal Price API, handed to
/// [`PriceClient`](crate::client::PriceClient) at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceApiConfig {
    /// The `api_key` query parameter sent with every request.
    pub api_key: String,
    /// The currency quotes are requested in.
    pub base_currency: String,
}

impl PriceApiConfig {
    /// Used whenever `BASE_CURRENCY` is not set at build time.
    pub const DEFAULT_BASE_CURRENCY: &'static str = "INR";

    pub fn new(api_key: impl Into<String>, base_currency: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_currency: base_currency.into(),
        }
    }

    /// Reads the configuration captured from the build environment.
    ///
    /// # Environment Variables (read at compile time, like the rest of the
    /// bundle's configuration):
    /// - `METAL_API_KEY`: the Metal Price API credential.
    /// - `BASE_CURRENCY`: quoting currency code, defaults to INR.
    pub fn from_env() -> Self {
        let api_key = option_env!("METAL_API_KEY").unwrap_or_default();
        let base_currency = option_env!("BASE_CURRENCY")
            .filter(|value| !value.is_empty())
            .unwrap_or(Self::DEFAULT_BASE_CURRENCY);

        Self::new(api_key, base_currency)
    }
}
