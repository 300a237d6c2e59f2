//! Catalog page - release grid with lazy artwork.

use dioxus::prelude::*;
use encore_core::{format_duration, Release};

use crate::components::{LazyImage, NavHeader, NavLocation, PreloadGate};
use crate::context::{use_catalog, use_density};

/// Covers in the first row load without waiting for the viewport.
const ABOVE_THE_FOLD: usize = 4;

#[component]
pub fn Releases() -> Element {
    let catalog = use_catalog();
    let density = use_density();
    let grid_class = density().resolve("release-grid", "release-grid release-grid--compact");

    // Only the first row is worth blocking on
    let first_row: Vec<String> = catalog
        .artwork_urls()
        .into_iter()
        .take(ABOVE_THE_FOLD)
        .collect();

    rsx! {
        NavHeader { current: NavLocation::Catalog }

        main { class: "page releases",
            h2 { class: "section-header", "Releases" }

            if catalog.releases.is_empty() {
                div { class: "empty-state",
                    p { "No releases in the catalog yet." }
                }
            } else {
                PreloadGate { urls: first_row,
                    div { class: "{grid_class}",
                        for (index, release) in catalog.releases.iter().enumerate() {
                            ReleaseCard {
                                key: "{release.id}",
                                release: release.clone(),
                                priority: index < ABOVE_THE_FOLD,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReleaseCard(release: Release, priority: bool) -> Element {
    let density = use_density();
    let classes = density().classes();
    let runtime = format_duration(release.total_duration_ms());
    let track_count = release.tracks.len();

    rsx! {
        article { class: "release-card {classes.text}",
            LazyImage {
                src: release.artwork_url.clone(),
                alt: format!("{} artwork", release.title),
                priority,
                class: "release-card__art".to_string(),
            }
            div { class: "release-card__meta",
                h3 { class: "release-card__title", "{release.title}" }
                p { class: "release-card__artist", "{release.artist}" }
                p { class: "release-card__details",
                    "{release.release_date} · {track_count} tracks · {runtime}"
                }
                if let Some(url) = release.spotify_url.clone() {
                    a { class: "release-card__link", href: "{url}", target: "_blank", "Open in Spotify" }
                }
            }
        }
    }
}
