//! Encore Core Library
//!
//! Client-side logic behind the Encore campaign dashboard for musicians.
//!
//! ## Overview
//!
//! None of this is a deep system. The crate collects the small pieces of
//! state and sequencing that the Dioxus pages lean on, kept free of any
//! rendering surface so they can be driven directly from tests:
//!
//! - **Lazy images**: viewport-triggered loading behind a [`ViewportObserver`]
//! - **Preloading**: fan-out/fan-in image preloads with progress
//! - **Density**: comfortable/compact class resolution from an injected config
//! - **Rows**: expanded-row tracking for tables
//! - **Checkout**: subscription intent creation and payment confirmation
//!
//! ## Quick Start
//!
//! ```ignore
//! use encore_core::{DensityConfig, DensityMode, ExpandedRows};
//!
//! let density = DensityConfig::new(DensityMode::Compact);
//! assert_eq!(density.resolve("p-4", "p-2"), "p-2");
//!
//! let rows = ExpandedRows::new().toggle(3);
//! assert!(rows.is_expanded(3));
//! ```

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod density;
pub mod error;
pub mod lazy_image;
pub mod logging;
pub mod preload;
pub mod rows;
pub mod toast;
pub mod viewport;

// Re-exports
pub use catalog::{format_cents, format_duration, Campaign, CampaignStatus, Catalog, Release, Track};
pub use checkout::{
    Activation, ActivationFlow, CardDetails, CheckoutEffects, CheckoutError, ClientSecret,
    HttpSubscriptionApi, PaymentConfirmer, PaymentMethod, PaymentOutcome, PaymentStatus,
    StripeConfirmer, SubscriptionApi, SubscriptionIntent, REDIRECT_DELAY,
};
pub use config::{AppConfig, Environment};
pub use density::{resolve, DensityClasses, DensityConfig, DensityMode};
pub use error::{EncoreError, EncoreResult};
pub use lazy_image::{ImageLoadState, LazyImage, LazyImageWatcher};
pub use preload::{
    HttpImageFetcher, ImageFetcher, ImagePreloader, PreloadError, PreloadProgress, PreloadReport,
};
pub use rows::ExpandedRows;
pub use toast::{Toast, ToastQueue, ToastVariant, TOAST_LIMIT};
pub use viewport::{
    EntryCallback, IntersectionEntry, ManualViewport, ObserveOptions, ViewportError, ViewportObserver,
    WatchControl, WatchId,
};
