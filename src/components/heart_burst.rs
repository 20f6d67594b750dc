//! Heart Burst Component
//!
//! Floating hearts shown over the login card after a correct PIN.

use dioxus::prelude::*;

use crate::context::use_page;

/// Celebration overlay. Renders nothing once the burst has ended.
#[component]
pub fn HeartBurst() -> Element {
    let page = use_page();

    let hearts = page.with(|p| p.celebration().map(|burst| burst.hearts().to_vec()));
    let Some(hearts) = hearts else {
        return rsx! {};
    };

    rsx! {
        div { class: "heart-burst",
            for heart in hearts {
                span {
                    key: "{heart.id}",
                    class: "floating-heart",
                    style: heart.style(),
                    "{heart.glyph}"
                }
            }
        }
    }
}
