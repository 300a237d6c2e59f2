//! Landing page - entry point to the dashboard.
//!
//! Returning users with a catalog go straight to their campaigns.

use dioxus::prelude::*;
use encore_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::LazyImage;
use crate::context::{use_catalog, use_density};

/// Artwork tiles shown in the hero strip.
const HERO_TILES: usize = 4;

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let catalog = use_catalog();
    let density = use_density();

    use_effect(move || {
        if !catalog.campaigns.is_empty() {
            tracing::info!(
                campaigns = catalog.campaigns.len(),
                "Returning user detected, opening dashboard"
            );
            navigator.push(Route::Dashboard {});
        }
    });

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "Encore" }
                p { class: "tagline", "Campaigns, releases, and streams in one place" }

                div { class: "landing-actions",
                    Button {
                        density: density().mode,
                        onclick: move |_| {
                            navigator.push(Route::Dashboard {});
                        },
                        "Open dashboard"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        density: density().mode,
                        onclick: move |_| {
                            navigator.push(Route::Checkout {});
                        },
                        "Go Pro"
                    }
                }
            }

            if !catalog.releases.is_empty() {
                section { class: "hero-strip",
                    for release in catalog.releases.iter().take(HERO_TILES) {
                        LazyImage {
                            key: "{release.id}",
                            src: release.artwork_url.clone(),
                            alt: release.title.clone(),
                            priority: true,
                            class: "hero-strip__tile".to_string(),
                        }
                    }
                }
            }
        }
    }
}
