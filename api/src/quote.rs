//! A single price observation for a metal against the base currency.

use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::currency;

/// One spot-price observation.
///
/// Quotes are created fresh on every successful fetch and superseded, never
/// mutated, by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// The metal code the quote is for, as supplied by the caller.
    pub code: String,
    /// The currency the price is quoted in.
    pub base: String,
    /// Price of one troy ounce in the base currency. Always positive.
    pub price: f64,
    /// When the API observed the rate, falling back to the fetch time.
    pub observed_at: DateTime<Utc>,
}

impl PriceQuote {
    /// The price rendered with exactly two decimal digits.
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// The price with the base currency's symbol (e.g. "₹1234.50").
    pub fn display_price(&self) -> String {
        currency::format_amount(&self.formatted_price(), &self.base)
    }

    /// The observation time rendered in the viewer's local timezone.
    pub fn local_observed_at(&self) -> String {
        self.observed_at.with_timezone(&Local).format("%c").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(price: f64) -> PriceQuote {
        PriceQuote {
            code: "XAU".to_owned(),
            base: "INR".to_owned(),
            price,
            observed_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn price_renders_two_decimal_digits() {
        assert_eq!(quote(1234.5).formatted_price(), "1234.50");
        assert_eq!(quote(1234.567).formatted_price(), "1234.57");
        assert_eq!(quote(7.0).formatted_price(), "7.00");
    }

    #[test]
    fn display_price_carries_the_base_symbol() {
        assert_eq!(quote(1234.5).display_price(), "₹1234.50");

        let mut other_base = quote(42.0);
        other_base.base = "ABC".to_owned();
        assert_eq!(other_base.display_price(), "42.00 ABC");
    }
}
