use std::rc::Rc;
use std::time::Instant;

use dioxus::prelude::*;

use crate::components::PageShell;
use crate::context::{create_controller, PageHandle};
use crate::pages::{Home, Landing, Login};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/login` - PIN entry
/// - `/home` - Daily message, extra messages and comfort mode
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageShell)]
        #[route("/")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/home")]
        Home {},
}

/// Root application component.
///
/// Provides global styles, the page controller context, and routing.
#[component]
pub fn App() -> Element {
    let page = use_signal(create_controller);
    let synced = use_hook(|| CopyValue::new(Instant::now()));
    let pin_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_context_provider(|| PageHandle::new(page, synced));
    use_context_provider(|| pin_element);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
