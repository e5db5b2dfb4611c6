use campus_nav::prelude::MenuRow;
use dioxus::prelude::*;
use crate::hooks::SessionHandle;

// Left padding of a top-level row; depth indent is added on top
const BASE_PADDING: u32 = 12;

#[component]
pub fn MenuRowItem(row: MenuRow) -> Element {
    let mut session = use_context::<SessionHandle>();
    let action = row.action();
    let icon = row.icon.clone().unwrap_or_default();
    let padding = BASE_PADDING + row.indent;
    let chevron = row.chevron();

    let class = match (row.active, row.is_group()) {
        (true, true) => "menu-row menu-group active",
        (false, true) => "menu-row menu-group",
        (true, false) => "menu-row active",
        (false, false) => "menu-row",
    };

    rsx! {
        div {
            class: class,
            style: "padding-left: {padding}px;",
            onclick: move |_| session.press(&action),

            span { class: "menu-icon", "{icon}" }
            span { class: "menu-label", "{row.name}" }
            if row.is_group() {
                span { class: "menu-chevron", "{chevron}" }
            }
        }
    }
}
