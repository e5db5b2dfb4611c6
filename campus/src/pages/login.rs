use campus_nav::prelude::Role;
use dioxus::prelude::*;
use crate::hooks::AuthHandle;
use crate::pages::redirect_for;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_context::<AuthHandle>();
    let nav = navigator();

    // Already signed in: the login form has nothing to offer
    use_effect(move || {
        let current = *auth.state.read();
        if let Some(target) = redirect_for(current, None) {
            tracing::info!("login page visited while signed in, redirecting");
            nav.replace(target);
        }
    });

    // Collected for the form only; nothing checks them
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let picked = auth.picked_role();
    let error = auth.error.read().clone().unwrap_or_default();

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "login-title", "Campus Portal" }
                p { class: "login-subtitle", "Choose how you want to sign in" }

                div { class: "role-grid",
                    for role in Role::ALL {
                        button {
                            key: "{role}",
                            class: if picked == Some(role) { "role-card selected" } else { "role-card" },
                            onclick: move |_| auth.pick_role(role),
                            {role.label()}
                        }
                    }
                }

                div { class: "form-field",
                    label { "Username" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. jane.doe",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if !error.is_empty() {
                    div { class: "form-error", "{error}" }
                }

                button {
                    class: "btn-primary w-full",
                    onclick: move |_| {
                        if let Some(role) = auth.sign_in() {
                            nav.push(Route::Portal { role });
                        }
                    },
                    "Sign In"
                }

                div { class: "demo-logins",
                    p { class: "demo-title", "Or try a demo account" }
                    for role in Role::ALL {
                        button {
                            key: "demo-{role}",
                            class: "btn-secondary",
                            onclick: move |_| {
                                if let Some(role) = auth.demo_login(role) {
                                    nav.push(Route::Portal { role });
                                }
                            },
                            {format!("{} Demo", role.label())}
                        }
                    }
                }
            }
        }
    }
}
