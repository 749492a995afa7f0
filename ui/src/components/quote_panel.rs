use dioxus::prelude::*;

use api::quote::PriceQuote;

/// The bordered result panel shown after a successful search.
///
/// `name` is whatever the user typed, kept alongside the canonical code.
#[component]
pub fn QuotePanel(name: String, quote: PriceQuote) -> Element {
    rsx! {
        div {
            class: "quote-panel",
            h2 { "{name} ({quote.code})" }
            p {
                strong { "Price: " }
                "{quote.display_price()}"
            }
            p {
                strong { "Base Currency: " }
                "{quote.base}"
            }
            p {
                strong { "Last Updated: " }
                "{quote.local_observed_at()}"
            }
        }
    }
}
