use std::sync::Arc;

use campus_nav::prelude::Role;
use dioxus::prelude::*;
use crate::hooks::use_session;
use crate::route_book::RouteBook;

/// Menu and content for one signed-in role.
///
/// Mount it keyed by role so a role switch builds a new session.
#[component]
pub fn RoleShell(role: Role) -> Element {
    let book = use_context::<Arc<RouteBook>>();
    let session = use_session(role, &book);
    use_context_provider(|| session);

    rsx! {
        div {
            class: "dashboard-container",
            crate::components::layout::Sidebar {}
            crate::components::layout::ContentArea {}
        }
    }
}
