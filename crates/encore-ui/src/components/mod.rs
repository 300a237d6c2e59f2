//! Reusable presentational components.

mod audio_visualizer;
mod button;
mod progress_ring;
mod skeleton;
mod toast;

pub use audio_visualizer::*;
pub use button::*;
pub use progress_ring::*;
pub use skeleton::*;
pub use toast::*;
