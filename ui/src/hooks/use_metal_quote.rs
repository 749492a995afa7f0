use dioxus::prelude::*;

use api::client::PriceClient;
use api::error::FetchError;
use api::quote::PriceQuote;

/// Fetches the latest quote for `code`, re-running whenever the code
/// changes.
///
/// The resource drops the superseded future on each re-run, so a response
/// that arrives after navigating to another metal can never overwrite the
/// newer code's state. `restart()` on the returned resource is the retry.
pub fn use_metal_quote(code: String) -> Resource<Result<PriceQuote, FetchError>> {
    let client = use_context::<PriceClient>();

    use_resource(use_reactive((&code,), move |(code,)| {
        let client = client.clone();
        async move {
            let quote = client.latest_quote(&code).await;
            if let Err(e) = &quote {
                dioxus_logger::tracing::warn!("quote fetch for {code} failed: {e}");
            }
            quote
        }
    }))
}
