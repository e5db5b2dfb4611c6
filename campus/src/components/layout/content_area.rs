use dioxus::prelude::*;
use crate::hooks::{AuthHandle, SessionHandle};
use crate::Route;

#[component]
pub fn ContentArea() -> Element {
    let mut auth = use_context::<AuthHandle>();
    let session = use_context::<SessionHandle>();
    let nav = navigator();

    let role = session.role();
    let role_label = role.label();
    let crumbs = session.breadcrumbs();
    let last = crumbs.len().saturating_sub(1);
    let view = session.view();

    rsx! {
        main { class: "content-area",
            header { class: "content-header",
                div { class: "breadcrumbs",
                    for (idx, crumb) in crumbs.into_iter().enumerate() {
                        span {
                            key: "{idx}",
                            class: if idx == last { "crumb current" } else { "crumb" },
                            "{crumb}"
                        }
                    }
                }
                div { class: "header-actions",
                    span { class: "role-badge role-{role}", "{role_label}" }
                    button {
                        class: "btn-logout",
                        onclick: move |_| {
                            auth.logout();
                            nav.replace(Route::Login {});
                        },
                        "Log out"
                    }
                }
            }
            div { class: "content-body",
                crate::components::screens::ScreenView { view }
            }
        }
    }
}
