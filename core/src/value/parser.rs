//! Parsing of raw stat literals into numeric animation targets.
//!
//! Stat literals mix digits with decoration: `"150+"`, `"$5M"`, `"99.9%"`,
//! `"<100"`. Parsing keeps only the magnitude and the multiplier letter; the
//! rest of the decoration is recovered by [`super::Decoration`].

/// Multiplier letter found in a stat literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    Thousand,
    Million,
    Billion,
}

impl Multiplier {
    /// Detect the multiplier of a raw literal, case-insensitively.
    ///
    /// Checked in the order K, M, B; only the first match applies.
    pub fn detect(raw: &str) -> Option<Self> {
        [Self::Thousand, Self::Million, Self::Billion]
            .into_iter()
            .find(|m| raw.chars().any(|c| c.eq_ignore_ascii_case(&m.letter())))
    }

    pub fn factor(self) -> f64 {
        match self {
            Self::Thousand => 1_000.0,
            Self::Million => 1_000_000.0,
            Self::Billion => 1_000_000_000.0,
        }
    }

    /// Upper-case letter used when rendering.
    pub fn letter(self) -> char {
        match self {
            Self::Thousand => 'K',
            Self::Million => 'M',
            Self::Billion => 'B',
        }
    }
}

/// Result of parsing a stat literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedValue {
    /// Fully expanded target, e.g. `5_000_000.0` for `"$5M"`
    pub value: f64,
    pub multiplier: Option<Multiplier>,
}

/// Parse a raw stat literal.
///
/// Returns `None` when the literal carries no numeric magnitude; such stats
/// are skipped rather than reported.
pub fn parse_value(raw: &str) -> Option<ParsedValue> {
    if raw.is_empty() {
        return None;
    }

    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let magnitude = parse_leading_float(&numeric)?;

    let multiplier = Multiplier::detect(raw);
    let value = match multiplier {
        Some(m) => magnitude * m.factor(),
        None => magnitude,
    };

    value.is_finite().then_some(ParsedValue { value, multiplier })
}

/// Parse the longest `digits[.digits]` prefix of a string made of digits and dots.
///
/// `"1.5.3"` parses as `1.5`; a prefix without any digit is rejected.
fn parse_leading_float(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;

    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(raw: &str) -> Option<f64> {
        parse_value(raw).map(|p| p.value)
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(value_of("150"), Some(150.0));
        assert_eq!(value_of("0"), Some(0.0));
        assert_eq!(value_of("99.9%"), Some(99.9));
        assert_eq!(value_of("150+"), Some(150.0));
        assert_eq!(value_of("<100"), Some(100.0));
    }

    #[test]
    fn multipliers_expand() {
        assert_eq!(value_of("1.5K"), Some(1_500.0));
        assert_eq!(value_of("2M"), Some(2_000_000.0));
        assert_eq!(value_of("3B"), Some(3_000_000_000.0));
        assert_eq!(value_of("$5M"), Some(5_000_000.0));
        assert_eq!(value_of("10k+"), Some(10_000.0));
    }

    #[test]
    fn multiplier_priority_is_k_then_m_then_b() {
        // "BKM" carries all three letters; K wins
        let parsed = parse_value("1BKM").unwrap();
        assert_eq!(parsed.multiplier, Some(Multiplier::Thousand));
        assert_eq!(parsed.value, 1_000.0);

        let parsed = parse_value("2 mb").unwrap();
        assert_eq!(parsed.multiplier, Some(Multiplier::Million));
    }

    #[test]
    fn separators_are_stripped() {
        // Commas are dropped along with every other non-numeric character
        assert_eq!(value_of("1,234"), Some(1_234.0));
        assert_eq!(value_of("$1,000,000"), Some(1_000_000.0));
    }

    #[test]
    fn leading_numeric_prefix_only() {
        assert_eq!(value_of("1.5.3"), Some(1.5));
        assert_eq!(value_of(".5"), Some(0.5));
        assert_eq!(value_of("5."), Some(5.0));
    }

    #[test]
    fn values_without_magnitude_are_excluded() {
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("∞"), None);
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value("K"), None);
    }

    #[test]
    fn overflowing_magnitude_is_excluded() {
        let huge = "9".repeat(400);
        assert_eq!(parse_value(&huge), None);
    }

    #[test]
    fn detect_multiplier() {
        assert_eq!(Multiplier::detect("1.5k"), Some(Multiplier::Thousand));
        assert_eq!(Multiplier::detect("$5M"), Some(Multiplier::Million));
        assert_eq!(Multiplier::detect("3b"), Some(Multiplier::Billion));
        assert_eq!(Multiplier::detect("150+"), None);
    }
}
