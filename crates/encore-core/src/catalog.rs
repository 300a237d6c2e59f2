//! Catalog data: releases, their tracks, and the campaigns promoting them.
//!
//! Read from `catalog.json` in the data directory. The file is produced by
//! the catalog sync on the backend; a missing file is an empty catalog.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EncoreResult;

pub const CATALOG_FILE: &str = "catalog.json";

/// A track on a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub duration_ms: u64,
    /// Streaming popularity, 0-100
    #[serde(default)]
    pub popularity: u8,
}

impl Track {
    /// `m:ss` duration label.
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_ms)
    }
}

/// A single, EP, or album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub release_date: NaiveDate,
    pub artwork_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Release {
    pub fn total_duration_ms(&self) -> u64 {
        self.tracks.iter().map(|t| t.duration_ms).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "status status--draft",
            CampaignStatus::Active => "status status--active",
            CampaignStatus::Paused => "status status--paused",
            CampaignStatus::Completed => "status status--completed",
        }
    }
}

/// A promotion campaign for a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub release_id: String,
    #[serde(default)]
    pub status: CampaignStatus,
    pub start_date: NaiveDate,
    pub budget_cents: u64,
    #[serde(default)]
    pub spent_cents: u64,
    #[serde(default)]
    pub streams: u64,
    #[serde(default)]
    pub saves: u64,
}

impl Campaign {
    /// Fraction of budget spent, clamped to `[0, 1]`.
    pub fn spend_ratio(&self) -> f32 {
        if self.budget_cents == 0 {
            return 0.0;
        }
        (self.spent_cents as f32 / self.budget_cents as f32).clamp(0.0, 1.0)
    }

    /// Cost per stream in cents, if anything streamed.
    pub fn cost_per_stream_cents(&self) -> Option<f64> {
        (self.streams > 0).then(|| self.spent_cents as f64 / self.streams as f64)
    }
}

/// Everything shown on the dashboard and catalog pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

impl Catalog {
    /// Load `catalog.json` from `data_dir`.
    pub fn load(data_dir: &Path) -> EncoreResult<Self> {
        let path = data_dir.join(CATALOG_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "No catalog file, starting empty");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        tracing::info!(
            releases = catalog.releases.len(),
            campaigns = catalog.campaigns.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn release(&self, id: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.id == id)
    }

    pub fn artwork_urls(&self) -> Vec<String> {
        self.releases.iter().map(|r| r.artwork_url.clone()).collect()
    }
}

/// Format milliseconds as `m:ss`.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Format cents as dollars with two decimals.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
