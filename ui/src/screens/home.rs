//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use api::client::PriceClient;
use api::metal::Metal;
use api::quote::PriceQuote;

use crate::components::metal_card::MetalCard;
use crate::components::quote_panel::QuotePanel;

/// A successful search result, keeping the name the user typed for display.
#[derive(Clone, PartialEq)]
pub struct SearchHit {
    pub name: String,
    pub quote: PriceQuote,
}

/// Fetch status of the search panel. Any submit restarts at `Loading`,
/// whatever the current state is.
#[derive(Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(SearchHit),
    Failure(String),
}

/// Resolves the raw search input to a catalog metal.
///
/// `None` means the input was empty and the submit is a no-op. An unknown
/// name is a local failure and never reaches the network.
fn resolve_query(raw: &str) -> Option<Result<Metal, String>> {
    let name = raw.trim();
    if name.is_empty() {
        return None;
    }
    Some(Metal::from_display_name(name).ok_or_else(|| "Metal not found".to_owned()))
}

#[component]
pub fn HomeScreen() -> Element {
    let client = use_context::<PriceClient>();
    let mut query = use_signal(String::new);
    let mut state = use_signal(SearchState::default);
    // Bumped on every submit; a spawned fetch only applies its outcome if
    // its generation is still the current one.
    let mut generation = use_signal(|| 0u32);

    let mut submit = move || {
        let raw = query();
        let Some(resolved) = resolve_query(&raw) else {
            return;
        };
        let metal = match resolved {
            Ok(metal) => metal,
            Err(message) => {
                state.set(SearchState::Failure(message));
                return;
            }
        };

        let current = generation() + 1;
        generation.set(current);
        state.set(SearchState::Loading);

        let client = client.clone();
        let typed = raw.trim().to_owned();
        spawn(async move {
            let outcome = client.latest_quote(metal.code()).await;
            if *generation.peek() != current {
                // A newer search owns the panel now.
                return;
            }
            match outcome {
                Ok(quote) => state.set(SearchState::Success(SearchHit { name: typed, quote })),
                Err(e) => {
                    dioxus_logger::tracing::warn!("search for {} failed: {e}", metal.code());
                    state.set(SearchState::Failure(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "home",
            h1 { "Metal Prices" }

            div {
                class: "search-bar",
                input {
                    r#type: "text",
                    placeholder: "Enter metal name (Gold, Silver...)",
                    value: "{query}",
                    oninput: move |event| query.set(event.value()),
                }
                button {
                    onclick: move |_| submit(),
                    "Search"
                }
            }

            match &*state.read() {
                SearchState::Idle => rsx! {},
                SearchState::Loading => rsx! {
                    p { "Loading..." }
                },
                SearchState::Failure(message) => rsx! {
                    p { class: "error-text", "{message}" }
                },
                SearchState::Success(hit) => rsx! {
                    QuotePanel {
                        name: hit.name.clone(),
                        quote: hit.quote.clone(),
                    }
                },
            }

            // The four cards are always shown, whatever the search state.
            div {
                class: "metal-grid",
                for metal in Metal::iter() {
                    MetalCard { metal }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_no_op() {
        assert_eq!(resolve_query(""), None);
        assert_eq!(resolve_query("   "), None);
    }

    #[test]
    fn unknown_name_fails_locally() {
        assert_eq!(
            resolve_query("Unobtainium"),
            Some(Err("Metal not found".to_owned()))
        );
    }

    #[test]
    fn known_names_resolve_in_any_case() {
        assert_eq!(resolve_query("gold"), Some(Ok(Metal::XAU)));
        assert_eq!(resolve_query(" SILVER "), Some(Ok(Metal::XAG)));
    }
}
