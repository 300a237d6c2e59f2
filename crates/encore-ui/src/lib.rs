//! Encore UI Components
//!
//! Dioxus presentational components for the Encore dashboard.
//!
//! ## Design Notes
//!
//! - Every size-sensitive component takes a [`DensityMode`] prop instead of
//!   reading a global, so callers pass down whatever the context provides
//! - Geometry helpers (ring offsets, visualizer bars) are plain functions
//!   and carry the unit tests
//!
//! [`DensityMode`]: encore_core::DensityMode

pub mod components;

pub use components::*;
