//! System locale detection for thousands grouping.

use moonshot_types::NumberLocale;

/// Languages whose default grouping separator is `.`.
const PERIOD_GROUPING_LANGUAGES: &[&str] = &[
    "da", "de", "el", "es", "hr", "id", "it", "nl", "pt", "ro", "sl", "sr", "tr", "vi",
];

/// Grouping convention of the current system locale, `Standard` when unknown.
pub fn detect_number_locale() -> NumberLocale {
    sys_locale::get_locale()
        .map(|tag| number_locale_for_tag(&tag))
        .unwrap_or_default()
}

/// Map a BCP 47 style tag (`de-DE`, `en_US`) to a grouping convention.
pub fn number_locale_for_tag(tag: &str) -> NumberLocale {
    let language = tag
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if PERIOD_GROUPING_LANGUAGES.contains(&language.as_str()) {
        NumberLocale::European
    } else {
        NumberLocale::Standard
    }
}
