//! Progress Ring Component
//!
//! Circular SVG progress indicator used for preloads and campaign budgets.

use dioxus::prelude::*;

/// Computed SVG values for a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f32,
    pub circumference: f32,
    /// `stroke-dashoffset` for the progress arc
    pub dash_offset: f32,
    /// Clamped progress as a whole percentage
    pub percent: u32,
}

/// Geometry for a ring of `size` px with `stroke` px width.
///
/// Progress is clamped to `[0, 1]`; NaN counts as zero.
pub fn ring_geometry(progress: f32, size: f32, stroke: f32) -> RingGeometry {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let radius = ((size - stroke) / 2.0).max(0.0);
    let circumference = 2.0 * std::f32::consts::PI * radius;
    RingGeometry {
        radius,
        circumference,
        dash_offset: circumference * (1.0 - progress),
        percent: (progress * 100.0).round() as u32,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProgressRingProps {
    /// 0.0 to 1.0
    pub progress: f32,
    #[props(default = 48.0)]
    pub size: f32,
    #[props(default = 4.0)]
    pub stroke: f32,
    /// Show the percentage in the middle
    #[props(default = true)]
    pub show_label: bool,
}

/// Circular progress indicator
///
/// ```rust,ignore
/// rsx! { ProgressRing { progress: preload().progress(), size: 64.0 } }
/// ```
#[component]
pub fn ProgressRing(props: ProgressRingProps) -> Element {
    let geo = ring_geometry(props.progress, props.size, props.stroke);
    let size = props.size;
    let center = size / 2.0;
    let stroke = props.stroke;

    rsx! {
        div {
            class: "progress-ring",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{geo.percent}",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                circle {
                    class: "progress-ring__track",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{geo.radius}",
                    fill: "none",
                    stroke_width: "{stroke}",
                }
                circle {
                    class: "progress-ring__arc",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{geo.radius}",
                    fill: "none",
                    stroke_width: "{stroke}",
                    stroke_dasharray: "{geo.circumference}",
                    stroke_dashoffset: "{geo.dash_offset}",
                    transform: "rotate(-90 {center} {center})",
                }
            }
            if props.show_label {
                span { class: "progress-ring__label", "{geo.percent}%" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ring_offset_is_full_circumference() {
        let geo = ring_geometry(0.0, 48.0, 4.0);
        assert_eq!(geo.radius, 22.0);
        assert!((geo.dash_offset - geo.circumference).abs() < 1e-4);
        assert_eq!(geo.percent, 0);
    }

    #[test]
    fn full_ring_offset_is_zero() {
        let geo = ring_geometry(1.0, 48.0, 4.0);
        assert!(geo.dash_offset.abs() < 1e-4);
        assert_eq!(geo.percent, 100);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ring_geometry(1.7, 48.0, 4.0).percent, 100);
        assert_eq!(ring_geometry(-0.3, 48.0, 4.0).percent, 0);
        assert_eq!(ring_geometry(f32::NAN, 48.0, 4.0).percent, 0);
    }

    #[test]
    fn third_rounds_to_33() {
        assert_eq!(ring_geometry(1.0 / 3.0, 48.0, 4.0).percent, 33);
    }
}
