//=============================================================================
// File: src/screens/metal.rs
//=============================================================================
use dioxus::prelude::*;

use api::metal::MetalTheme;

use crate::hooks::use_metal_quote::use_metal_quote;

/// The detail screen for one metal.
///
/// The route code is accepted verbatim: codes outside the catalog are still
/// fetched, under a neutral theme with the raw code as the title. The fetch
/// re-runs automatically whenever the route's code changes.
#[component]
pub fn MetalScreen(code: String) -> Element {
    let theme = MetalTheme::for_code(&code);
    let mut quote = use_metal_quote(code.clone());

    rsx! {
        match &*quote.read() {
            None => rsx! {
                p {
                    class: "detail-loading",
                    "Loading {theme.name} details..."
                }
            },
            Some(Err(e)) => rsx! {
                div {
                    class: "error-box",
                    strong { "Oops! Something went wrong." }
                    p { "Error: {e}" }
                    button {
                        style: "background: {theme.color};",
                        onclick: move |_| quote.restart(),
                        "Retry"
                    }
                }
            },
            Some(Ok(q)) => rsx! {
                div {
                    class: "detail-panel",
                    style: "background: {theme.gradient};",
                    h1 {
                        style: "color: {theme.color};",
                        "{theme.name} ({q.code})"
                    }
                    p { class: "detail-price", "{q.display_price()}" }
                    p {
                        strong { "Base Currency: " }
                        "{q.base}"
                    }
                    p {
                        strong { "Last Updated: " }
                        "{q.local_observed_at()}"
                    }
                }
            },
        }
    }
}
