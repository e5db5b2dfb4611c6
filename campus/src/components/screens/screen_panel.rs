use dioxus::prelude::*;
use crate::screen::Screen;

#[component]
pub fn ScreenPanel(screen: Screen) -> Element {
    let title = screen.title();
    let summary = screen.summary();

    rsx! {
        section { class: "screen-panel",
            div { class: "panel-header",
                h2 { "{title}" }
                p { class: "panel-summary", "{summary}" }
            }
            div { class: "panel-body",
                div { class: "empty-state", "No records to show yet." }
            }
        }
    }
}
