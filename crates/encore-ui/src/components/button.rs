//! Button Components
//!
//! - Primary: main call to action
//! - Secondary: outlined
//! - Ghost: text-only
//! - Destructive: cancel subscription and friends

use dioxus::prelude::*;
use encore_core::{resolve, DensityMode};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Destructive => "btn-destructive",
        }
    }
}

/// Full class string for a variant at a density, plus any extra classes.
pub fn button_class(variant: ButtonVariant, density: DensityMode, extra: Option<&str>) -> String {
    let size = resolve(density, "btn--md", "btn--sm");
    match extra.filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {} {}", variant.class(), size, extra),
        None => format!("{} {}", variant.class(), size),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub density: DensityMode,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// button, submit, or reset
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         density: density.mode,
///         onclick: move |_| start_checkout(),
///         "Upgrade to Pro"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.density, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
