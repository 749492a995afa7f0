//! Display helpers for the configured base currency.

/// Returns the graphical symbol for a currency code (e.g. '$').
///
/// Covers the currencies this app is plausibly configured with; anything
/// else gets the code-suffix form from [`format_amount`].
pub fn symbol(code: &str) -> Option<&'static str> {
    let symbol = match code.to_ascii_uppercase().as_str() {
        "AUD" | "CAD" | "NZD" | "SGD" | "USD" => "$",
        "CHF" => "CHF",
        "CNY" | "JPY" => "¥",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "KRW" => "₩",
        "ZAR" => "R",
        _ => return None,
    };
    Some(symbol)
}

/// Formats an already-rendered amount for display: symbol-prefixed when the
/// currency has a known symbol, "amount CODE" otherwise.
pub fn format_amount(amount: &str, code: &str) -> String {
    match symbol(code) {
        Some(symbol) => format!("{symbol}{amount}"),
        None => format!("{amount} {code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currencies_have_symbols() {
        assert_eq!(symbol("INR"), Some("₹"));
        assert_eq!(symbol("usd"), Some("$"));
        assert_eq!(symbol("XYZ"), None);
    }

    #[test]
    fn format_falls_back_to_the_code() {
        assert_eq!(format_amount("1234.50", "INR"), "₹1234.50");
        assert_eq!(format_amount("1234.50", "XYZ"), "1234.50 XYZ");
    }
}
