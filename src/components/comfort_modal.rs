//! Comfort Modal Component
//!
//! Overlay with a single comforting message. Clicking the dimmed
//! background or the close button dismisses it; clicks inside the card
//! are ignored.

use dailycomfort_core::{ModalPhase, PointerTarget, Viewport};
use dioxus::prelude::*;

use crate::context::use_page;

const VIEWPORT_SCRIPT: &str =
    "return [window.innerWidth, document.documentElement.clientWidth];";

/// Measure window and document width for scrollbar compensation.
///
/// Falls back to a zero-width scrollbar if the webview can't answer.
pub async fn measure_viewport() -> Viewport {
    let widths: serde_json::Value = match dioxus::document::eval(VIEWPORT_SCRIPT).await {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Viewport measurement failed: {:?}", e);
            return Viewport { inner_width: 0.0, client_width: 0.0 };
        }
    };

    let width = |i: usize| widths.get(i).and_then(|w| w.as_f64()).unwrap_or(0.0);
    Viewport {
        inner_width: width(0),
        client_width: width(1),
    }
}

#[component]
pub fn ComfortModal() -> Element {
    let mut page = use_page();

    let (class, message, phase) = page.with(|p| {
        let modal = p.comfort();
        (modal.class(), modal.message().to_string(), modal.phase())
    });

    if phase == ModalPhase::Closed {
        return rsx! {};
    }

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                page.update(|p| p.modal_pointer(PointerTarget::Overlay));
            },

            div {
                class: "comfort-content",
                onclick: move |e| {
                    e.stop_propagation();
                    page.update(|p| p.modal_pointer(PointerTarget::Content));
                },

                span { class: "comfort-fox", "🦊" }
                p { class: "comfort-message", "{message}" }

                button {
                    class: "comfort-close",
                    onclick: move |e| {
                        e.stop_propagation();
                        page.update(|p| p.close_comfort());
                    },
                    "Close"
                }
            }
        }
    }
}
