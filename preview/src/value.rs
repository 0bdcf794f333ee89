//! `value` command: frames of a single stat literal.

use moonshot_core::locale::detect_number_locale;
use moonshot_core::{ElementId, StatEntry};
use moonshot_types::{Easing, NumberLocale};

use crate::ValueArgs;
use crate::error::PreviewError;

pub fn run(args: &ValueArgs) -> Result<(), PreviewError> {
    // Detached entry: the element id is never looked up
    let entry = StatEntry::new(
        ElementId(0),
        args.raw.clone(),
        args.prefix.clone(),
        args.suffix.clone(),
    )
    .ok_or_else(|| PreviewError::Unparseable(args.raw.clone()))?;
    let easing = Easing::from_name(&args.easing);
    let locale = args.locale.map(Into::into).unwrap_or_else(detect_number_locale);

    tracing::debug!(
        value = entry.target_value(),
        easing = easing.name(),
        ?locale,
        "Previewing value"
    );

    for (progress, text) in frames(&entry, easing, args.steps, locale) {
        println!("{progress:.2}\t{text}");
    }
    Ok(())
}

/// `steps + 1` evenly spaced `(progress, text)` pairs ending on the exact target.
fn frames(
    entry: &StatEntry,
    easing: Easing,
    steps: u32,
    locale: NumberLocale,
) -> Vec<(f64, String)> {
    if steps == 0 {
        return vec![(1.0, entry.final_text(locale))];
    }
    (0..=steps)
        .map(|i| {
            let progress = f64::from(i) / f64::from(steps);
            (progress, entry.text_at(progress, easing, locale))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(raw: &str, prefix: &str) -> StatEntry {
        StatEntry::new(ElementId(0), raw.to_string(), prefix.to_string(), String::new()).unwrap()
    }

    #[test]
    fn frames_end_on_target() {
        let frames = frames(&stat("1.5K", ""), Easing::Linear, 4, NumberLocale::Standard);
        let texts: Vec<&str> = frames.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["0K", "0.4K", "0.8K", "1.1K", "1.5K"]);
    }

    #[test]
    fn zero_steps_prints_only_target() {
        let frames = frames(&stat("99%", ""), Easing::EaseOutCubic, 0, NumberLocale::Standard);
        assert_eq!(frames, vec![(1.0, "99%".to_string())]);
    }

    #[test]
    fn last_frame_matches_animator_final_text() {
        let entry = stat("$1234567", "$");
        for easing in [Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            let frames = frames(&entry, easing, 7, NumberLocale::Standard);
            let (progress, text) = frames.last().unwrap();
            assert_eq!(*progress, 1.0);
            assert_eq!(*text, entry.final_text(NumberLocale::Standard));
        }
    }
}
