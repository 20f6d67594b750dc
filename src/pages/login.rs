//! Login page - masked PIN entry.
//!
//! A correct PIN starts the heart burst and moves on to the home page
//! after a short delay. A wrong one shakes the field and clears it.

use dailycomfort_core::{LoginOutcome, LoginState, Location};
use dioxus::prelude::*;

use crate::components::{HeartBurst, TransitionLink};
use crate::context::{use_page, use_pin_element};

const WRONG_PIN: &str = "Wrong PIN. Try again.";

#[component]
pub fn Login() -> Element {
    let mut page = use_page();
    let mut pin_element = use_pin_element();

    use_effect(move || {
        if let Err(e) = page.update(|p| p.load(Location::Login)) {
            tracing::error!("Failed to load login page: {}", e);
        }
    });

    let submit = move |e: FormEvent| {
        e.prevent_default();
        match page.update(|p| p.submit_pin()) {
            Ok(LoginOutcome::Accepted) => tracing::debug!("Celebrating"),
            Ok(LoginOutcome::Rejected) => {}
            Err(e) => tracing::warn!("PIN submit ignored: {}", e),
        }
    };

    let (visible, error_visible, shaking, state) = page.with(|p| {
        let login = p.login();
        (
            login.field().visible(),
            login.error_visible(),
            login.is_shaking(),
            login.state(),
        )
    });
    let success = state == LoginState::Success;

    rsx! {
        main { class: "login-page",
            form { class: "login-card", onsubmit: submit,
                h1 { class: "page-title", "Welcome back" }
                p { class: "tagline", "Enter your PIN" }

                input {
                    class: if shaking { "pin-input shake" } else { "pin-input" },
                    r#type: "text",
                    inputmode: "numeric",
                    autocomplete: "off",
                    autofocus: true,
                    value: "{visible}",
                    oninput: move |e| {
                        page.update(|p| p.pin_input(&e.value()));
                    },
                    onmounted: move |e| pin_element.set(Some(e.data())),
                }

                p {
                    class: if error_visible { "error-message" } else { "error-message hidden" },
                    "{WRONG_PIN}"
                }

                button {
                    class: if success { "login-btn loading" } else { "login-btn" },
                    r#type: "submit",
                    if success { "Welcome" } else { "Unlock" }
                }

                TransitionLink {
                    href: Location::Landing.href().to_string(),
                    class: "back-link".to_string(),
                    "Back"
                }
            }

            HeartBurst {}
        }
    }
}
