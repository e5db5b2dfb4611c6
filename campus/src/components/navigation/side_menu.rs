use dioxus::prelude::*;
use crate::components::navigation::MenuRowItem;
use crate::hooks::SessionHandle;

/// The role's route tree as an indented, collapsible list
#[component]
pub fn SideMenu() -> Element {
    let session = use_context::<SessionHandle>();
    let rows = session.menu();

    rsx! {
        nav { class: "side-menu",
            for (idx, row) in rows.into_iter().enumerate() {
                MenuRowItem { key: "{idx}", row }
            }
        }
    }
}
