use dioxus::prelude::*;

use api::metal::Metal;

use crate::Route;

/// A clickable card for one catalog metal. Activating it navigates to the
/// metal's detail route; the card itself holds no fetch state.
#[component]
pub fn MetalCard(metal: Metal) -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "metal-card",
            onclick: move |_| {
                navigator.push(Route::MetalScreen {
                    code: metal.code().to_owned(),
                });
            },
            div {
                class: "metal-card-header",
                style: "background: {metal.color()};",
                "{metal.display_name()}"
            }
            div {
                class: "metal-card-body",
                div {
                    class: "metal-card-swatch",
                    style: "background: {metal.gradient()};",
                }
                p { "Click to view details" }
                span { class: "metal-card-code", "{metal.code()}" }
            }
        }
    }
}
