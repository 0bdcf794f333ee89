//! Reconstruction of a stat's display string at any animated value.

use std::sync::LazyLock;

use moonshot_types::NumberLocale;
use moonshot_types::formatting::{format_fixed, format_grouped, format_rounded};
use regex::Regex;

use super::parser::Multiplier;

/// Trailing decoration such as `+` or `%`, never a multiplier letter.
static TRAILING_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.KMBkmb]+$").expect("suffix pattern is valid"));

/// Which formatting style the source literal used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Multiplied(Multiplier),
    Percent,
    Currency,
    Plus,
    LessThan,
    Infinity,
    Plain,
}

impl Style {
    /// First matching marker wins, in the order the variants are declared.
    fn detect(raw: &str, suffix: &str) -> Self {
        if let Some(multiplier) = Multiplier::detect(raw) {
            Self::Multiplied(multiplier)
        } else if raw.contains('%') && !suffix.contains('%') {
            Self::Percent
        } else if raw.contains('$') {
            Self::Currency
        } else if raw.contains('+') && !suffix.contains('+') {
            Self::Plus
        } else if raw.contains('<') {
            Self::LessThan
        } else if raw.contains('∞') {
            Self::Infinity
        } else {
            Self::Plain
        }
    }
}

/// Prefix, suffix and style of a stat, computed once from its literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    prefix: String,
    suffix: String,
    style: Style,
}

impl Decoration {
    /// Build the decoration for a raw literal.
    ///
    /// A non-empty `explicit_suffix` replaces the suffix that would otherwise
    /// be taken from the end of `raw`.
    pub fn new(raw: &str, prefix: &str, explicit_suffix: &str) -> Self {
        let suffix = if explicit_suffix.is_empty() {
            TRAILING_SUFFIX
                .find(raw)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        } else {
            explicit_suffix.to_string()
        };
        let style = Style::detect(raw, &suffix);

        Self {
            prefix: prefix.to_string(),
            suffix,
            style,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Suffix appended after the number and any style marker.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Render `value` in the literal's style.
    pub fn render(&self, value: f64, locale: NumberLocale) -> String {
        let body = match self.style {
            Style::Multiplied(multiplier) => {
                let factor = multiplier.factor();
                let decimals = if value % factor == 0.0 { 0 } else { 1 };
                format!("{}{}", format_fixed(value / factor, decimals), multiplier.letter())
            }
            Style::Percent => format!("{}%", format_rounded(value)),
            // `$` itself is expected in the prefix
            Style::Currency => format_grouped(value, locale.is_european()),
            Style::Plus => format!("{}+", format_rounded(value)),
            Style::LessThan => format!("< {}", format_rounded(value)),
            Style::Infinity => "∞".to_string(),
            Style::Plain => format_grouped(value, locale.is_european()),
        };
        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

/// One-shot formatting of `value` in the style of `raw`.
///
/// Equivalent to `Decoration::new(raw, prefix, explicit_suffix).render(value, locale)`.
pub fn format_value(
    value: f64,
    raw: &str,
    prefix: &str,
    explicit_suffix: &str,
    locale: NumberLocale,
) -> String {
    Decoration::new(raw, prefix, explicit_suffix).render(value, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STD: NumberLocale = NumberLocale::Standard;

    fn fmt(value: f64, raw: &str) -> String {
        format_value(value, raw, "", "", STD)
    }

    #[test]
    fn multiplier_styles() {
        assert_eq!(fmt(1_500.0, "1.5K"), "1.5K");
        assert_eq!(fmt(2_000.0, "2K"), "2K");
        assert_eq!(fmt(2_500_000.0, "2.5M"), "2.5M");
        assert_eq!(fmt(3_000_000_000.0, "3B"), "3B");
        assert_eq!(fmt(1_234.0, "1.2k"), "1.2K");
    }

    #[test]
    fn multiplier_intermediate_values() {
        assert_eq!(fmt(0.0, "2K"), "0K");
        assert_eq!(fmt(437.5, "2K"), "0.4K");
        assert_eq!(fmt(1_960.0, "2K"), "2.0K");
        assert_eq!(fmt(1_000_000.0, "5M"), "1M");
    }

    #[test]
    fn multiplier_keeps_trailing_suffix() {
        assert_eq!(fmt(10_000.0, "10K+"), "10K+");
        assert_eq!(format_value(5_000_000.0, "$5M+", "$", "", STD), "$5M+");
    }

    #[test]
    fn percent_style() {
        assert_eq!(fmt(99.0, "99%"), "99%");
        // The literal suffix already carries `%`, so it is not doubled
        assert_eq!(fmt(99.9, "99.9%"), "100%");
        assert_eq!(fmt(42.4, "%"), "42%");
    }

    #[test]
    fn currency_style_uses_prefix() {
        assert_eq!(format_value(1_500_000.0, "$1500000", "$", "", STD), "$1,500,000");
        assert_eq!(format_value(250.0, "$250", "", "", STD), "250");
        assert_eq!(
            format_value(1_500_000.0, "$1500000", "$", "", NumberLocale::European),
            "$1.500.000"
        );
    }

    #[test]
    fn plus_style() {
        assert_eq!(fmt(150.0, "150+"), "150+");
        assert_eq!(fmt(74.6, "150+"), "75+");
    }

    #[test]
    fn less_than_style() {
        assert_eq!(fmt(100.0, "<100"), "< 100");
        assert_eq!(fmt(12.2, "<100 s"), "< 12 s");
    }

    #[test]
    fn infinity_ignores_value() {
        let decoration = Decoration::new("1 ∞", "", "");
        assert_eq!(decoration.style(), Style::Infinity);
        // The literal tail " ∞" is kept as the suffix
        assert_eq!(decoration.render(0.0, STD), "∞ ∞");
        assert_eq!(format_value(7.0, "1 ∞", "", "!", STD), "∞!");
    }

    #[test]
    fn plain_style_groups_thousands() {
        assert_eq!(fmt(150.0, "150"), "150");
        assert_eq!(fmt(12_345.0, "12345"), "12,345");
        assert_eq!(format_value(12_345.0, "12345", "", "", NumberLocale::European), "12.345");
        assert_eq!(fmt(7.0, ""), "7");
    }

    #[test]
    fn explicit_suffix_overrides_literal() {
        assert_eq!(format_value(150.0, "150+", "", " users", STD), "150+ users");
        assert_eq!(format_value(50.0, "50%", "", "%", STD), "50%");
        assert_eq!(format_value(24.0, "24", "", "/7", STD), "24/7");
    }

    #[test]
    fn prefix_applies_to_every_style() {
        assert_eq!(format_value(2_000.0, "2K", "~", "", STD), "~2K");
        assert_eq!(format_value(99.0, "99%", "~", "", STD), "~99%");
        assert_eq!(format_value(150.0, "150+", "~", "", STD), "~150+");
        assert_eq!(format_value(100.0, "<100", "~", "", STD), "~< 100");
        assert_eq!(format_value(150.0, "150", "~", "", STD), "~150");
    }

    #[test]
    fn suffix_never_captures_multiplier_letters() {
        let decoration = Decoration::new("5M", "", "");
        assert_eq!(decoration.suffix(), "");

        let decoration = Decoration::new("99.9%", "", "");
        assert_eq!(decoration.suffix(), "%");
        // Percent marker is suppressed because the suffix already has `%`
        assert_eq!(decoration.style(), Style::Plain);
    }

    #[test]
    fn style_precedence() {
        assert_eq!(Decoration::new("$5M", "", "").style(), Style::Multiplied(Multiplier::Million));
        assert_eq!(Decoration::new("$99", "", "").style(), Style::Currency);
        assert_eq!(Decoration::new("$99+", "", "").style(), Style::Currency);
        assert_eq!(Decoration::new("<5+", "", "").style(), Style::LessThan);
        assert_eq!(Decoration::new("<5+", "", "-").style(), Style::Plus);
    }
}
