//! Home page - daily message, extra messages and comfort mode.
//!
//! Loads the message catalog on mount. Pointer, wheel and key input
//! anywhere on the page keeps the session alive.

use dailycomfort_core::{load_catalog, Activity, Location};
use dioxus::prelude::*;

use crate::components::{measure_viewport, ComfortModal, TransitionLink};
use crate::context::use_page;

#[component]
pub fn Home() -> Element {
    let mut page = use_page();

    use_effect(move || {
        if let Err(e) = page.update(|p| p.load(Location::Home)) {
            tracing::error!("Failed to load home page: {}", e);
            return;
        }
        if !page.peek_with(|p| p.needs_catalog()) {
            return;
        }

        let path = page.peek_with(|p| p.config().catalog_path.clone());
        spawn(async move {
            let load = load_catalog(&path).await;
            if let Err(e) = page.update(|p| p.install_catalog(load)) {
                tracing::warn!("Catalog not installed: {}", e);
            }
        });
    });

    let generate = move |_| match page.update(|p| p.generate_extra()) {
        Ok(true) => {}
        Ok(false) => tracing::debug!("Still generating"),
        Err(e) => tracing::warn!("Generate ignored: {}", e),
    };

    let open_comfort = move |_| {
        spawn(async move {
            let viewport = measure_viewport().await;
            if let Err(e) = page.update(|p| p.open_comfort(viewport)) {
                tracing::warn!("Comfort mode unavailable: {}", e);
            }
        });
    };

    let logout = move |_| {
        if let Err(e) = page.update(|p| p.logout()) {
            tracing::error!("Logout failed: {}", e);
        }
    };

    let (text, opacity, label, loading) = page.with(|p| {
        (
            p.message().text().to_string(),
            p.message().opacity(),
            p.generate().label(),
            p.generate().is_loading(),
        )
    });

    rsx! {
        main {
            class: "home-page",
            onclick: move |_| page.update(|p| p.activity(Activity::Click)),
            onkeypress: move |_| page.update(|p| p.activity(Activity::KeyPress)),
            onmousemove: move |_| page.update(|p| p.activity(Activity::MouseMove)),
            onwheel: move |_| page.update(|p| p.activity(Activity::Scroll)),

            header { class: "home-header",
                h1 { class: "page-title", "Daily Comfort" }
                button { class: "logout-btn", onclick: logout, "Log out" }
            }

            section { class: "message-card",
                p { class: "section-header", "Today's message" }
                p {
                    class: "daily-message",
                    style: "opacity: {opacity};",
                    "{text}"
                }

                button {
                    class: if loading { "generate-btn loading" } else { "generate-btn" },
                    disabled: loading,
                    onclick: generate,
                    "{label}"
                }
            }

            button {
                class: "fox-clickable",
                title: "Comfort mode",
                onclick: open_comfort,
                "🦊"
            }

            footer { class: "home-footer",
                TransitionLink {
                    href: Location::Landing.href().to_string(),
                    class: "back-link".to_string(),
                    "Back to start"
                }
            }

            ComfortModal {}
        }
    }
}
