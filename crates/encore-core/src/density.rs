//! Display density - comfortable vs compact sizing.
//!
//! The density mode is a plain value handed to whoever renders. The desktop
//! app provides a [`DensityConfig`] through Dioxus context; nothing here
//! reads global state.

use serde::{Deserialize, Serialize};

/// Display density preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DensityMode {
    #[default]
    Comfortable,
    Compact,
}

impl DensityMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            DensityMode::Comfortable => DensityMode::Compact,
            DensityMode::Compact => DensityMode::Comfortable,
        }
    }

    /// Short label for settings menus.
    pub fn label(&self) -> &'static str {
        match self {
            DensityMode::Comfortable => "comfortable",
            DensityMode::Compact => "compact",
        }
    }
}

impl std::str::FromStr for DensityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "comfortable" => Ok(DensityMode::Comfortable),
            "compact" => Ok(DensityMode::Compact),
            other => Err(format!("unknown density mode: {other}")),
        }
    }
}

/// Pick the value matching `mode`.
pub fn resolve<'a>(mode: DensityMode, comfortable: &'a str, compact: &'a str) -> &'a str {
    match mode {
        DensityMode::Comfortable => comfortable,
        DensityMode::Compact => compact,
    }
}

/// Density configuration injected into the component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DensityConfig {
    pub mode: DensityMode,
}

impl DensityConfig {
    pub fn new(mode: DensityMode) -> Self {
        Self { mode }
    }

    pub fn resolve<'a>(&self, comfortable: &'a str, compact: &'a str) -> &'a str {
        resolve(self.mode, comfortable, compact)
    }

    pub fn is_compact(&self) -> bool {
        self.mode == DensityMode::Compact
    }

    /// Common class presets for the current mode.
    pub fn classes(&self) -> DensityClasses {
        DensityClasses::for_mode(self.mode)
    }
}

/// Class names shared by tables, cards, and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityClasses {
    pub row: &'static str,
    pub cell: &'static str,
    pub text: &'static str,
    pub gap: &'static str,
    pub button: &'static str,
}

impl DensityClasses {
    pub fn for_mode(mode: DensityMode) -> Self {
        Self {
            row: resolve(mode, "row row--comfortable", "row row--compact"),
            cell: resolve(mode, "cell cell--comfortable", "cell cell--compact"),
            text: resolve(mode, "text-base", "text-sm"),
            gap: resolve(mode, "gap-md", "gap-sm"),
            button: resolve(mode, "btn--md", "btn--sm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_picks_by_mode() {
        assert_eq!(resolve(DensityMode::Compact, "a", "b"), "b");
        assert_eq!(resolve(DensityMode::Comfortable, "a", "b"), "a");
    }

    #[test]
    fn resolve_is_stable_across_calls() {
        for _ in 0..3 {
            assert_eq!(resolve(DensityMode::Compact, "a", "b"), "b");
            assert_eq!(resolve(DensityMode::Comfortable, "a", "b"), "a");
        }
    }

    #[test]
    fn config_resolve_uses_injected_mode() {
        let compact = DensityConfig::new(DensityMode::Compact);
        assert!(compact.is_compact());
        assert_eq!(compact.resolve("p-4", "p-2"), "p-2");
        assert_eq!(DensityConfig::default().resolve("p-4", "p-2"), "p-4");
    }

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(DensityMode::Comfortable.toggle(), DensityMode::Compact);
        assert_eq!(DensityMode::Compact.toggle().toggle(), DensityMode::Compact);
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("Compact".parse::<DensityMode>(), Ok(DensityMode::Compact));
        assert_eq!("comfortable".parse::<DensityMode>(), Ok(DensityMode::Comfortable));
        assert!("cozy".parse::<DensityMode>().is_err());
    }

    #[test]
    fn classes_follow_mode() {
        let classes = DensityConfig::new(DensityMode::Compact).classes();
        assert_eq!(classes.text, "text-sm");
        assert_eq!(classes.row, "row row--compact");
    }
}
