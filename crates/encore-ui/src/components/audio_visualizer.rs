//! Audio Visualizer Component
//!
//! Equalizer-style bars for track previews. Levels come from the caller;
//! when nothing is playing, [`idle_levels`] gives a gentle moving wave.

use dioxus::prelude::*;

/// Bar heights in percent for `bars` bars.
///
/// `levels` (0.0-1.0) are resampled to the bar count by nearest index and
/// clamped. No levels means every bar sits at `min_pct`.
pub fn bar_heights(levels: &[f32], bars: usize, min_pct: f32) -> Vec<f32> {
    let min_pct = min_pct.clamp(0.0, 100.0);
    (0..bars)
        .map(|i| {
            if levels.is_empty() {
                return min_pct;
            }
            let src = i * levels.len() / bars;
            let level = levels[src];
            let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
            min_pct + level * (100.0 - min_pct)
        })
        .collect()
}

/// Smooth idle wave for animation frame `tick`.
pub fn idle_levels(tick: u32, bars: usize) -> Vec<f32> {
    (0..bars)
        .map(|i| {
            let phase = tick as f32 * 0.35 + i as f32 * 0.6;
            0.5 + 0.5 * phase.sin()
        })
        .collect()
}

#[derive(Clone, PartialEq, Props)]
pub struct AudioVisualizerProps {
    /// Per-band levels, 0.0 to 1.0
    pub levels: Vec<f32>,
    #[props(default = 16)]
    pub bars: usize,
    #[props(default = 8.0)]
    pub min_pct: f32,
    #[props(default = true)]
    pub playing: bool,
}

#[component]
pub fn AudioVisualizer(props: AudioVisualizerProps) -> Element {
    let heights = bar_heights(&props.levels, props.bars, props.min_pct);
    let class = if props.playing {
        "visualizer visualizer--playing"
    } else {
        "visualizer"
    };

    rsx! {
        div { class: "{class}", "aria-hidden": "true",
            for (i, h) in heights.into_iter().enumerate() {
                span {
                    key: "{i}",
                    class: "visualizer__bar",
                    style: "height: {h:.1}%;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_levels_sit_at_minimum() {
        assert_eq!(bar_heights(&[], 4, 10.0), vec![10.0; 4]);
    }

    #[test]
    fn levels_are_clamped_and_scaled() {
        let heights = bar_heights(&[0.0, 1.0, 2.0, -1.0], 4, 0.0);
        assert_eq!(heights, vec![0.0, 100.0, 100.0, 0.0]);
    }

    #[test]
    fn levels_are_resampled_to_bar_count() {
        let heights = bar_heights(&[0.0, 1.0], 4, 0.0);
        assert_eq!(heights, vec![0.0, 0.0, 100.0, 100.0]);
    }

    #[test]
    fn idle_levels_stay_in_range() {
        for tick in 0..50 {
            for level in idle_levels(tick, 12) {
                assert!((0.0..=1.0).contains(&level));
            }
        }
    }
}
