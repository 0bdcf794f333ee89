//! Shared configuration types for the Moonshot stat counter.
//!
//! Everything here is plain data: the core crate consumes these types and
//! the preview binary loads them from TOML.

pub mod formatting;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Easing
// ─────────────────────────────────────────────────────────────────────────────

/// Easing curve applied to animation progress.
///
/// Serialized by its camelCase name (`"easeOutCubic"`). Unknown names fall
/// back to [`Easing::EaseOutCubic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Easing {
    #[default]
    EaseOutCubic,
    EaseOutQuad,
    EaseInOutCubic,
    Linear,
}

impl Easing {
    /// Resolve an easing by name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "easeOutQuad" => Self::EaseOutQuad,
            "easeInOutCubic" => Self::EaseInOutCubic,
            "linear" => Self::Linear,
            _ => Self::EaseOutCubic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::Linear => "linear",
        }
    }

    /// Map linear progress in `[0, 1]` to eased progress.
    ///
    /// # Examples
    /// ```
    /// use moonshot_types::Easing;
    /// assert_eq!(Easing::Linear.apply(0.25), 0.25);
    /// assert_eq!(Easing::EaseOutCubic.apply(0.5), 0.875);
    /// assert_eq!(Easing::EaseOutQuad.apply(0.5), 0.75);
    /// assert_eq!(Easing::EaseInOutCubic.apply(0.25), 0.0625);
    /// ```
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Linear => t,
        }
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.name().to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Number locale
// ─────────────────────────────────────────────────────────────────────────────

/// Thousands-grouping convention used for plain and currency stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    /// `1,234,567`
    #[default]
    Standard,
    /// `1.234.567`
    European,
}

impl NumberLocale {
    #[inline]
    pub fn is_european(self) -> bool {
        matches!(self, Self::European)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Visibility
// ─────────────────────────────────────────────────────────────────────────────

/// Margin applied to the viewport before intersecting, in CSS pixels.
///
/// Positive values grow the root box outward, negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// When a stat container counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityOptions {
    /// Fraction of the container that must be inside the root box.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            // Trigger slightly before the container is fully on screen
            root_margin: RootMargin {
                bottom: -50.0,
                ..RootMargin::default()
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for an animated stats component.
///
/// Every field is optional in TOML; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Animation duration in milliseconds
    pub duration_ms: u64,
    pub easing: Easing,
    /// Delay before the first stat of a trigger starts
    pub start_delay_ms: u64,
    /// Extra delay per stat within one trigger
    pub stagger_delay_ms: u64,
    /// Selector for stat value elements
    pub selector: String,
    /// Attribute holding the raw stat literal
    pub value_attribute: String,
    pub prefix_attribute: String,
    pub suffix_attribute: String,
    /// Observed container, matched from the stat element upwards
    pub container_selector: String,
    /// Group whose stats all start together once any of its containers shows
    pub group_selector: String,
    pub visibility: VisibilityOptions,
    /// Grouping convention; detected from the system locale when unset
    pub number_locale: Option<NumberLocale>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            easing: Easing::EaseOutCubic,
            start_delay_ms: 100,
            stagger_delay_ms: 100,
            selector: "[data-stat-value]".to_string(),
            value_attribute: "data-stat-value".to_string(),
            prefix_attribute: "data-stat-prefix".to_string(),
            suffix_attribute: "data-stat-suffix".to_string(),
            container_selector: "section".to_string(),
            group_selector: "[data-stats-section]".to_string(),
            visibility: VisibilityOptions::default(),
            number_locale: None,
        }
    }
}
