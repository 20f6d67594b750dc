//! Page Shell - drives the page controller.
//!
//! Layout around every route. Runs the timer loop that feeds real elapsed
//! time into the controller and performs the effects it emits. Also mirrors
//! the modal scroll lock and the page-exit class onto the document body.

use std::rc::Rc;
use std::time::Duration;

use dailycomfort_core::transition::PAGE_EXIT_CLASS;
use dailycomfort_core::{Effect, Location};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_page, use_pin_element};

/// Upper bound on a single sleep of the timer loop.
const TICK: Duration = Duration::from_millis(100);

const DIALOG_TITLE: &str = "Daily Comfort";

#[component]
pub fn PageShell() -> Element {
    let mut page = use_page();
    let pin_element = use_pin_element();
    let navigator = use_navigator();

    use_future(move || async move {
        loop {
            let wait = page.time_until_next().unwrap_or(TICK).min(TICK);
            tokio::time::sleep(wait).await;

            // Writing re-renders every subscriber, so only when something fires.
            if page.timer_due() {
                page.update(|_| ());
            }

            if page.has_effects() {
                let effects = page.update(|p| p.drain_effects());
                for effect in effects {
                    perform(effect, navigator, pin_element).await;
                }
            }
        }
    });

    let body = use_memo(move || {
        page.with(|p| (p.comfort().body(), p.transition().is_exiting()))
    });

    use_effect(move || {
        let (lock, exiting) = body();
        let script = format!(
            "document.body.style.cssText = {:?}; document.body.classList.toggle({:?}, {});",
            lock.css(),
            PAGE_EXIT_CLASS,
            exiting
        );
        let _ = dioxus::document::eval(&script);
    });

    rsx! {
        Outlet::<Route> {}
    }
}

/// Router target for a controller location.
fn route_for(location: Location) -> Route {
    match location {
        Location::Landing => Route::Landing {},
        Location::Login => Route::Login {},
        Location::Home => Route::Home {},
    }
}

async fn perform(
    effect: Effect,
    navigator: Navigator,
    pin_element: Signal<Option<Rc<MountedData>>>,
) {
    match effect {
        Effect::Navigate(href) => {
            let location = Location::from_href(&href).unwrap_or_else(|| {
                tracing::warn!("Unknown page {}, going to landing", href);
                Location::Landing
            });
            navigator.push(route_for(location));
        }
        Effect::Alert(text) => {
            rfd::AsyncMessageDialog::new()
                .set_title(DIALOG_TITLE)
                .set_description(text)
                .set_level(rfd::MessageLevel::Info)
                .show()
                .await;
        }
        Effect::FocusPin => {
            let mounted = pin_element.peek().clone();
            if let Some(input) = mounted {
                if let Err(e) = input.set_focus(true).await {
                    tracing::debug!("Could not focus PIN input: {:?}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_targets_resolve_like_the_core() {
        let cases = [
            ("/", Route::Landing {}),
            ("index.html", Route::Landing {}),
            ("/login", Route::Login {}),
            ("login.html", Route::Login {}),
            ("/home", Route::Home {}),
            ("home.html?from=login", Route::Home {}),
        ];

        for (href, expected) in cases {
            let location = Location::from_href(href).unwrap();
            assert!(route_for(location) == expected, "{href}");
        }
    }
}
