use std::rc::Rc;

use dioxus::prelude::*;
use encore_core::{DensityConfig, ToastQueue};
use encore_ui::ToastStack;

use crate::context::{settings, use_toasts};
use crate::pages::{BillingSuccess, Checkout, Dashboard, Landing, Releases};
use crate::theme::GLOBAL_STYLES;
use crate::viewport::WebviewViewport;

/// Application routes.
///
/// - `/` - Landing page
/// - `/dashboard` - Campaign overview with expandable rows
/// - `/catalog` - Release grid with lazy artwork
/// - `/checkout` - Pro subscription
/// - `/billing/success` - Post-checkout confirmation
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/catalog")]
    Releases {},
    #[route("/checkout")]
    Checkout {},
    #[route("/billing/success")]
    BillingSuccess {},
}

/// Root application component.
///
/// Provides global styles, shared context, the toast stack, and routing.
#[component]
pub fn App() -> Element {
    let mode = settings().config.display.density;

    use_context_provider(|| Signal::new(DensityConfig::new(mode)));
    use_context_provider(|| Signal::new(ToastQueue::new()));
    use_context_provider(reqwest::Client::new);
    use_context_provider(|| Rc::new(WebviewViewport::new()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        Toasts {}
    }
}

#[component]
fn Toasts() -> Element {
    let mut toasts = use_toasts();
    let visible: Vec<_> = toasts.read().iter().cloned().collect();

    rsx! {
        ToastStack {
            toasts: visible,
            on_dismiss: move |id: u64| {
                toasts.write().dismiss(id);
            },
        }
    }
}
