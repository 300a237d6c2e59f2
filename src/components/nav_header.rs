//! Navigation Header Component
//!
//! App title, page links, and the density toggle.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_density;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Dashboard,
    Catalog,
    Upgrade,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [
        NavLocation::Dashboard,
        NavLocation::Catalog,
        NavLocation::Upgrade,
    ];

    /// Target of the wordmark link.
    pub fn home() -> Route {
        Route::Dashboard {}
    }

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Dashboard => "Campaigns",
            NavLocation::Catalog => "Catalog",
            NavLocation::Upgrade => "Upgrade",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Catalog => Route::Releases {},
            NavLocation::Upgrade => Route::Checkout {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: "Encore" wordmark
/// - Center: Navigation links
/// - Right: Comfortable/compact toggle
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut density = use_density();
    let mode = density().mode;
    let header_class = density().resolve("nav-header", "nav-header nav-header--compact");

    rsx! {
        header { class: "{header_class}",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    Link { to: NavLocation::home(), class: "app-title", "Encore" }
                }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if location == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }

                div { class: "nav-actions",
                    button {
                        r#type: "button",
                        class: "density-toggle",
                        "aria-label": "Switch to {mode.toggle().label()} density",
                        onclick: move |_| {
                            let next = density().mode.toggle();
                            tracing::debug!(density = next.label(), "Density changed");
                            density.write().mode = next;
                        },
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
