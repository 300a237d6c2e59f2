//! Skeleton placeholders shown while content loads.

use dioxus::prelude::*;
use encore_core::{resolve, DensityMode};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SkeletonShape {
    #[default]
    Block,
    Line,
    Circle,
}

impl SkeletonShape {
    pub fn class(&self) -> &'static str {
        match self {
            SkeletonShape::Block => "skeleton skeleton--block",
            SkeletonShape::Line => "skeleton skeleton--line",
            SkeletonShape::Circle => "skeleton skeleton--circle",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SkeletonProps {
    #[props(default)]
    pub shape: SkeletonShape,
    /// CSS width, e.g. "100%" or "120px"
    #[props(default = "100%".to_string())]
    pub width: String,
    #[props(default = "1rem".to_string())]
    pub height: String,
}

/// A single pulsing placeholder block
#[component]
pub fn Skeleton(props: SkeletonProps) -> Element {
    rsx! {
        div {
            class: props.shape.class(),
            style: "width: {props.width}; height: {props.height};",
            "aria-hidden": "true",
        }
    }
}

/// Widths for `lines` placeholder lines; the last one is shorter.
pub fn line_widths(lines: usize) -> Vec<&'static str> {
    (0..lines)
        .map(|i| if i + 1 == lines && lines > 1 { "60%" } else { "100%" })
        .collect()
}

/// Several lines of placeholder text
#[component]
pub fn SkeletonText(
    #[props(default = 3)] lines: usize,
    #[props(default)] density: DensityMode,
) -> Element {
    let height = resolve(density, "1rem", "0.75rem");
    let gap = resolve(density, "skeleton-text gap-md", "skeleton-text gap-sm");

    rsx! {
        div { class: "{gap}",
            for width in line_widths(lines) {
                Skeleton {
                    shape: SkeletonShape::Line,
                    width: width.to_string(),
                    height: height.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_line_is_shorter() {
        assert_eq!(line_widths(3), vec!["100%", "100%", "60%"]);
        assert_eq!(line_widths(1), vec!["100%"]);
        assert!(line_widths(0).is_empty());
    }

    #[test]
    fn shape_classes() {
        assert_eq!(SkeletonShape::default().class(), "skeleton skeleton--block");
        assert_eq!(SkeletonShape::Circle.class(), "skeleton skeleton--circle");
    }
}
