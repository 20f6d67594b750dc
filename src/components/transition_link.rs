//! Transition Link Component
//!
//! Anchor that plays the page-exit animation before internal navigation.
//! Fragment and external links keep their default behavior.

use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn TransitionLink(
    /// Link target, e.g. `/login`
    href: String,
    /// Extra CSS classes
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let mut page = use_page();
    let target = href.clone();

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |e| {
                if page.update(|p| p.follow_link(&target)) {
                    e.prevent_default();
                }
            },
            {children}
        }
    }
}
