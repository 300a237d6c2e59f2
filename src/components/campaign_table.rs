//! Campaign table with expandable detail rows.

use dioxus::prelude::*;
use encore_core::{format_cents, Campaign, CampaignStatus, ExpandedRows};
use encore_ui::{idle_levels, AudioVisualizer, ProgressRing};

use crate::context::{use_catalog, use_density};

const VISUALIZER_BARS: usize = 12;

/// One row per campaign; clicking a row toggles its detail panel.
#[component]
pub fn CampaignTable(campaigns: Vec<Campaign>) -> Element {
    let density = use_density();
    let mut expanded = use_signal(ExpandedRows::new);
    let classes = density().classes();

    if campaigns.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { "No campaigns yet. Campaigns appear here once a release is promoted." }
            }
        };
    }

    rsx! {
        table { class: "campaign-table {classes.text}",
            thead {
                tr { class: "{classes.row}",
                    th { class: "{classes.cell}" }
                    th { class: "{classes.cell}", "Campaign" }
                    th { class: "{classes.cell}", "Release" }
                    th { class: "{classes.cell}", "Status" }
                    th { class: "{classes.cell}", "Budget" }
                    th { class: "{classes.cell}", "Streams" }
                }
            }
            tbody {
                for (index, campaign) in campaigns.iter().enumerate() {
                    CampaignRow {
                        key: "{campaign.id}",
                        campaign: campaign.clone(),
                        index,
                        open: expanded.read().is_expanded(index),
                        on_toggle: move |index: usize| {
                            let next = expanded.read().toggle(index);
                            expanded.set(next);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CampaignRow(
    campaign: Campaign,
    index: usize,
    open: bool,
    on_toggle: EventHandler<usize>,
) -> Element {
    let density = use_density();
    let catalog = use_catalog();
    let classes = density().classes();
    let ring_size = if density().is_compact() { 28.0 } else { 40.0 };

    let release_title = catalog
        .release(&campaign.release_id)
        .map(|r| r.title.as_str())
        .unwrap_or("Unknown release");
    let row_class = if open {
        format!("{} campaign-row campaign-row--open", classes.row)
    } else {
        format!("{} campaign-row", classes.row)
    };

    rsx! {
        tr {
            class: "{row_class}",
            "aria-expanded": "{open}",
            onclick: move |_| on_toggle.call(index),
            td { class: "{classes.cell} chevron-cell",
                if open { "▾" } else { "▸" }
            }
            td { class: "{classes.cell}", "{campaign.name}" }
            td { class: "{classes.cell}", "{release_title}" }
            td { class: "{classes.cell}",
                span { class: campaign.status.class(), "{campaign.status.label()}" }
            }
            td { class: "{classes.cell} budget-cell",
                ProgressRing {
                    progress: campaign.spend_ratio(),
                    size: ring_size,
                    show_label: false,
                }
                span { "{format_cents(campaign.spent_cents)} / {format_cents(campaign.budget_cents)}" }
            }
            td { class: "{classes.cell}", "{campaign.streams}" }
        }
        if open {
            tr { class: "campaign-detail",
                td { colspan: "6",
                    CampaignDetail { campaign: campaign.clone(), index }
                }
            }
        }
    }
}

#[component]
fn CampaignDetail(campaign: Campaign, index: usize) -> Element {
    let density = use_density();
    let gap = density().classes().gap;
    let cost_per_stream = campaign
        .cost_per_stream_cents()
        .map(|c| format!("{c:.2}¢"))
        .unwrap_or_else(|| "n/a".to_string());

    rsx! {
        div { class: "campaign-detail__body {gap}",
            AudioVisualizer {
                levels: idle_levels(index as u32, VISUALIZER_BARS),
                bars: VISUALIZER_BARS,
                playing: campaign.status == CampaignStatus::Active,
            }
            dl { class: "campaign-stats",
                dt { "Started" }
                dd { "{campaign.start_date}" }
                dt { "Saves" }
                dd { "{campaign.saves}" }
                dt { "Cost per stream" }
                dd { "{cost_per_stream}" }
            }
        }
    }
}
