// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod hooks;
mod screens;

use api::client::PriceClient;
use api::config::PriceApiConfig;
use screens::home::HomeScreen;
use screens::metal::MetalScreen;

/// The internal routes of the app. Each variant's URL pattern renders the
/// component of the same name; `:code` is handed through verbatim and only
/// matched against the catalog at render time.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomeScreen {},
    #[route("/metal/:code")]
    MetalScreen { code: String },
}

const APP_CSS: &str = r#"
    body {
        margin: 0;
        font-family: Arial, sans-serif;
        color: #333;
    }

    /* --- HOME --- */
    .home { padding: 2rem; text-align: center; }
    .home h1 { font-size: 2.5rem; margin-bottom: 1rem; }

    .search-bar { margin-bottom: 2rem; }
    .search-bar input {
        padding: 0.5rem 1rem;
        font-size: 1rem;
        border-radius: 8px;
        border: 1px solid #ccc;
        width: 250px;
    }
    .search-bar button {
        margin-left: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 8px;
        border: none;
        background: #333;
        color: #fff;
        cursor: pointer;
    }

    .error-text { color: red; }

    .quote-panel {
        border: 2px solid #333;
        border-radius: 15px;
        padding: 1.5rem;
        max-width: 400px;
        margin: 0 auto 2rem;
        background: #f9f9f9;
        box-shadow: 0 5px 15px rgba(0,0,0,0.1);
    }
    .quote-panel h2 { margin-bottom: 1rem; color: #222; }

    /* --- METAL CARDS --- */
    .metal-grid {
        display: flex;
        justify-content: center;
        flex-wrap: wrap;
        gap: 1.5rem;
    }
    .metal-card {
        border-radius: 15px;
        width: 180px;
        background: #fff;
        box-shadow: 0 5px 15px rgba(0,0,0,0.1);
        cursor: pointer;
        overflow: hidden;
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .metal-card:hover {
        transform: scale(1.05);
        box-shadow: 0 10px 25px rgba(0,0,0,0.2);
    }
    .metal-card-header {
        padding: 0.8rem;
        text-align: center;
        color: #fff;
        font-weight: bold;
        font-size: 1rem;
    }
    .metal-card-body { padding: 1rem; text-align: center; }
    .metal-card-body p { color: #555; margin-bottom: 0.5rem; }
    .metal-card-swatch {
        width: 50px;
        height: 50px;
        border-radius: 50%;
        margin: 0 auto 0.5rem;
    }
    .metal-card-code {
        display: inline-block;
        padding: 0.3rem 0.6rem;
        border-radius: 5px;
        background: #f0f0f0;
        font-weight: bold;
    }

    /* --- DETAIL --- */
    .detail-loading { text-align: center; margin-top: 2rem; }
    .detail-panel {
        max-width: 600px;
        margin: 2rem auto;
        padding: 2rem;
        border-radius: 15px;
        box-shadow: 0 8px 20px rgba(0,0,0,0.2);
        text-align: center;
    }
    .detail-panel h1 { margin-bottom: 1rem; }
    .detail-price { font-size: 2rem; font-weight: bold; margin-bottom: 1rem; }

    .error-box {
        text-align: center;
        padding: 1rem;
        border: 1px solid #f5c2c7;
        background-color: #f8d7da;
        color: #842029;
        border-radius: 8px;
        max-width: 500px;
        margin: 2rem auto;
    }
    .error-box strong { display: block; margin-bottom: 0.5rem; }
    .error-box button {
        padding: 0.5rem 1rem;
        border-radius: 5px;
        border: none;
        cursor: pointer;
        margin-top: 1rem;
    }
"#;

#[allow(non_snake_case)]
pub fn App() -> Element {
    // One client for the whole app; screens pick it up from context.
    use_context_provider(|| PriceClient::new(PriceApiConfig::from_env()));

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style { "{APP_CSS}" }
        Router::<Route> {}
    }
}
