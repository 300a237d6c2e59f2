//! Image components
//!
//! Viewport-triggered single images and batch preloading with progress.

mod lazy_image;
mod preload;

pub use lazy_image::{use_lazy_image, LazyImage, LazyImageHandle};
pub use preload::{use_preload, PreloadGate};
