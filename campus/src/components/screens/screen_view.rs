use campus_nav::prelude::View;
use dioxus::prelude::*;
use crate::components::screens::{DashboardScreen, FallbackScreen, ScreenPanel};
use crate::screen::Screen;

/// Mounts the component for whatever the session resolved
#[component]
pub fn ScreenView(view: View<Screen>) -> Element {
    match view {
        View::Blank => rsx! {
            div { class: "screen-blank", "Select an item from the menu." }
        },
        View::Screen(Screen::Dashboard) => rsx! { DashboardScreen {} },
        View::Screen(screen) => rsx! { ScreenPanel { screen } },
        View::Fallback(key) => rsx! { FallbackScreen { requested: key } },
    }
}
