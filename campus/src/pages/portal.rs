use campus_nav::prelude::Role;
use dioxus::prelude::*;
use crate::components::layout::RoleShell;
use crate::hooks::AuthHandle;
use crate::pages::redirect_for;

/// `/portal/:role` - only reachable while signed in as that role
#[component]
pub fn Portal(role: Role) -> Element {
    let auth = use_context::<AuthHandle>();
    let nav = navigator();
    let allowed = auth.current().authenticated_role() == Some(role);

    use_effect(move || {
        let current = *auth.state.read();
        if let Some(target) = redirect_for(current, Some(role)) {
            tracing::info!(%role, "portal not open to this visitor, redirecting");
            nav.replace(target);
        }
    });

    if !allowed {
        return rsx! {
            div { class: "portal-redirect", "Redirecting…" }
        };
    }

    rsx! {
        RoleShell { key: "{role}", role }
    }
}
