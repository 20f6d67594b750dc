//! Landing page - entry point to Daily Comfort.

use dailycomfort_core::Location;
use dioxus::prelude::*;

use crate::components::TransitionLink;
use crate::context::use_page;

#[component]
pub fn Landing() -> Element {
    let mut page = use_page();

    use_effect(move || {
        if let Err(e) = page.update(|p| p.load(Location::Landing)) {
            tracing::error!("Failed to load landing page: {}", e);
        }
    });

    rsx! {
        main { class: "landing",
            div { class: "landing-card",
                span { class: "landing-fox", "🦊" }
                h1 { class: "page-title", "Daily Comfort" }
                p { class: "tagline", "a little message for every day" }

                TransitionLink {
                    href: Location::Login.href().to_string(),
                    class: "btn-enter".to_string(),
                    "Enter"
                }
            }
        }
    }
}
