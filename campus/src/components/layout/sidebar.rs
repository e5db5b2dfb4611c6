use dioxus::prelude::*;
use crate::hooks::SessionHandle;
use crate::route_book::ShellProfile;

#[component]
pub fn Sidebar() -> Element {
    let mut session = use_context::<SessionHandle>();
    let is_expanded = *session.sidebar_expanded.read();
    let profile = ShellProfile::for_role(session.role());

    rsx! {
        aside {
            class: if is_expanded { "sidebar" } else { "sidebar sidebar-collapsed" },

            if is_expanded {
                div { class: "sidebar-header",
                    div { class: "sidebar-brand",
                        span { "{profile.title}" }
                    }
                    button {
                        class: "btn-collapse",
                        onclick: move |_| session.toggle_sidebar(),
                        "‹"
                    }
                }

                crate::components::navigation::SideMenu {}
            } else {
                div { class: "sidebar-collapsed-content",
                    button {
                        class: "btn-expand",
                        onclick: move |_| session.toggle_sidebar(),
                        title: "Expand navigation",
                        "›"
                    }
                }
            }
        }
    }
}
