//! Centralized number formatting utilities.
//!
//! Stat decoration goes through this module so every rendered frame uses the
//! same rounding rules, and so European-style grouping (`.` as the thousands
//! separator) is applied in one place.

/// Apply European number format by swapping `.` and `,` in a formatted string.
fn europeanize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '.' => result.push(','),
            ',' => result.push('.'),
            _ => result.push(c),
        }
    }
    result
}

/// Apply European formatting conditionally.
#[inline]
fn maybe_eu(s: String, european: bool) -> String {
    if european { europeanize(&s) } else { s }
}

/// Insert `,` between every group of three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Round to the nearest integer, with halves going towards positive infinity.
///
/// # Examples
/// ```
/// use moonshot_types::formatting::round_half_up;
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(2.4), 2.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// ```
pub fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Format a value rounded to a whole number, without grouping.
///
/// # Examples
/// ```
/// use moonshot_types::formatting::format_rounded;
/// assert_eq!(format_rounded(149.6), "150");
/// assert_eq!(format_rounded(0.2), "0");
/// assert_eq!(format_rounded(3_000_000_000.0), "3000000000");
/// ```
pub fn format_rounded(n: f64) -> String {
    let rounded = round_half_up(n);
    // `-0` would otherwise print with its sign
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.0}", rounded)
}

/// Format a value rounded to a whole number with thousands separators.
///
/// - Standard: `1,234,567`
/// - European: `1.234.567`
///
/// # Examples
/// ```
/// use moonshot_types::formatting::format_grouped;
/// assert_eq!(format_grouped(0.0, false), "0");
/// assert_eq!(format_grouped(999.4, false), "999");
/// assert_eq!(format_grouped(1_500.0, false), "1,500");
/// assert_eq!(format_grouped(1_499_999.5, false), "1,500,000");
/// assert_eq!(format_grouped(1_500_000.0, true), "1.500.000");
/// ```
pub fn format_grouped(n: f64, european: bool) -> String {
    let plain = format_rounded(n);
    let s = match plain.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits)),
        None => group_digits(&plain),
    };
    maybe_eu(s, european)
}

/// Format a value with a fixed number of decimals.
///
/// Exact midpoints round up (`0.25` becomes `0.3`), where `{:.N}` alone
/// would round them to even. The decimal point is always `.`.
///
/// # Examples
/// ```
/// use moonshot_types::formatting::format_fixed;
/// assert_eq!(format_fixed(1.5, 1), "1.5");
/// assert_eq!(format_fixed(0.25, 1), "0.3");
/// assert_eq!(format_fixed(2.5, 0), "3");
/// assert_eq!(format_fixed(1.96, 1), "2.0");
/// ```
pub fn format_fixed(n: f64, decimals: usize) -> String {
    if n < 0.0 {
        let magnitude = format_fixed(-n, decimals);
        return if magnitude.bytes().all(|b| b == b'0' || b == b'.') {
            magnitude
        } else {
            format!("-{}", magnitude)
        };
    }
    let n = if n == 0.0 { 0.0 } else { n };

    if is_midpoint(n, decimals) {
        let step = 10f64.powi(decimals as i32);
        return format!("{:.*}", decimals, (n * step).ceil() / step);
    }
    format!("{:.*}", decimals, n)
}

/// True when `n` sits exactly halfway between two `decimals`-digit values.
fn is_midpoint(n: f64, decimals: usize) -> bool {
    const GUARD_DIGITS: usize = 20;
    let wide = format!("{:.*}", decimals + 1 + GUARD_DIGITS, n);
    let (head, tail) = wide.split_at(wide.len() - GUARD_DIGITS);
    head.ends_with('5') && tail.bytes().all(|b| b == b'0')
}
