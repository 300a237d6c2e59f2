//! Visual theme for Encore.

mod styles;

pub use styles::GLOBAL_STYLES;
