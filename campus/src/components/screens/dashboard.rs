use campus_nav::prelude::Role;
use dioxus::prelude::*;
use crate::hooks::SessionHandle;

// Static figures until the portal has a backend
const ADMIN_STATS: &[(&str, &str)] = &[
    ("Students", "1,248"),
    ("Faculty", "86"),
    ("Pending applications", "37"),
    ("Fees collected (term)", "72%"),
];
const STUDENT_STATS: &[(&str, &str)] = &[
    ("Attendance", "94%"),
    ("Assignments due", "3"),
    ("Next exam", "Mathematics, Mon"),
    ("Library books", "2"),
];
const FACULTY_STATS: &[(&str, &str)] = &[
    ("Classes today", "5"),
    ("Submissions to grade", "28"),
    ("Leave balance", "9 days"),
    ("Notices", "4"),
];
const PARENT_STATS: &[(&str, &str)] = &[
    ("Attendance", "94%"),
    ("Fees outstanding", "₹4,500"),
    ("Latest result", "A- (Science)"),
    ("Unread messages", "1"),
];

fn stats_for(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => ADMIN_STATS,
        Role::Student => STUDENT_STATS,
        Role::Faculty => FACULTY_STATS,
        Role::Parent => PARENT_STATS,
    }
}

/// Menu keys offered as shortcuts on the dashboard
fn shortcuts_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &["Admission Applications", "Fees Collection", "Notices"],
        Role::Student => &["Timetable", "Assignments", "Results"],
        Role::Faculty => &["Attendance", "Gradebook", "Leave"],
        Role::Parent => &["Attendance", "Fees", "Messages"],
    }
}

#[component]
pub fn DashboardScreen() -> Element {
    let session = use_context::<SessionHandle>();
    let role = session.role();

    rsx! {
        section { class: "dashboard",
            div { class: "stat-grid",
                for (label, value) in stats_for(role).iter() {
                    div { key: "{label}", class: "stat-card",
                        span { class: "stat-value", "{value}" }
                        span { class: "stat-label", "{label}" }
                    }
                }
            }
            div { class: "shortcuts",
                h3 { "Quick links" }
                for key in shortcuts_for(role).iter() {
                    {
                        let mut session = session;
                        let key = *key;
                        rsx! {
                            button {
                                key: "{key}",
                                class: "btn-shortcut",
                                onclick: move |_| session.open(key),
                                "{key}"
                            }
                        }
                    }
                }
            }
        }
    }
}
