use dioxus::prelude::*;

/// Shown when a menu key has no route in the current role's tree
#[component]
pub fn FallbackScreen(requested: String) -> Element {
    rsx! {
        section { class: "screen-panel screen-fallback",
            div { class: "panel-header",
                h2 { "{requested}" }
                p { class: "panel-summary", "This page is not available yet." }
            }
        }
    }
}
