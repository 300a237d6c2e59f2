//! Dashboard page - campaign overview.

use dioxus::prelude::*;
use encore_core::{format_cents, CampaignStatus};
use encore_ui::ProgressRing;

use crate::components::{CampaignTable, NavHeader, NavLocation};
use crate::context::{use_catalog, use_density};

#[component]
pub fn Dashboard() -> Element {
    let catalog = use_catalog();
    let density = use_density();
    let classes = density().classes();

    let active = catalog
        .campaigns
        .iter()
        .filter(|c| c.status == CampaignStatus::Active)
        .count();
    let budget: u64 = catalog.campaigns.iter().map(|c| c.budget_cents).sum();
    let spent: u64 = catalog.campaigns.iter().map(|c| c.spent_cents).sum();
    let streams: u64 = catalog.campaigns.iter().map(|c| c.streams).sum();
    let spend_ratio = if budget == 0 {
        0.0
    } else {
        (spent as f32 / budget as f32).min(1.0)
    };

    rsx! {
        NavHeader { current: NavLocation::Dashboard }

        main { class: "page dashboard {classes.gap}",
            section { class: "summary-cards {classes.gap}",
                div { class: "summary-card",
                    span { class: "summary-card__label", "Active campaigns" }
                    span { class: "summary-card__value", "{active}" }
                }
                div { class: "summary-card",
                    span { class: "summary-card__label", "Budget spent" }
                    div { class: "summary-card__ring",
                        ProgressRing { progress: spend_ratio, size: 56.0 }
                        span { "{format_cents(spent)} of {format_cents(budget)}" }
                    }
                }
                div { class: "summary-card",
                    span { class: "summary-card__label", "Streams" }
                    span { class: "summary-card__value", "{streams}" }
                }
            }

            section { class: "dashboard-campaigns",
                h2 { class: "section-header", "Campaigns" }
                CampaignTable { campaigns: catalog.campaigns.clone() }
            }
        }
    }
}
