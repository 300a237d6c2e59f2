//! UI Components for Encore.
//!
//! App-aware components that read context. Presentational pieces live in
//! `encore-ui`.

pub mod images;
mod campaign_table;
mod nav_header;

pub use campaign_table::CampaignTable;
pub use images::{LazyImage, PreloadGate};
pub use nav_header::{NavHeader, NavLocation};
