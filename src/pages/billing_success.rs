//! Billing success page - shown after the subscription is active.

use dioxus::prelude::*;
use encore_ui::Button;

use crate::app::Route;
use crate::context::use_density;

#[component]
pub fn BillingSuccess() -> Element {
    let navigator = use_navigator();
    let density = use_density();

    rsx! {
        main { class: "page billing-success",
            h1 { class: "page-title", "You're on Encore Pro" }
            p { class: "body-text",
                "Your subscription is active. Pro features are available across the dashboard."
            }
            Button {
                density: density().mode,
                onclick: move |_| {
                    navigator.push(Route::Dashboard {});
                },
                "Back to campaigns"
            }
        }
    }
}
