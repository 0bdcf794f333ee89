use moonshot_types::{Easing, NumberLocale};

use crate::host::ElementId;
use crate::value::{Decoration, parse_value};

/// Lifecycle of one stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Pending,
    Animating { started_at: f64 },
    Done,
}

/// One monitored stat element.
#[derive(Debug, Clone)]
pub struct StatEntry {
    element: ElementId,
    source_text: String,
    target_value: f64,
    prefix: String,
    suffix_override: String,
    decoration: Decoration,
    phase: Phase,
}

impl StatEntry {
    /// Track `element`, or `None` when `source_text` has no numeric value.
    pub fn new(
        element: ElementId,
        source_text: String,
        prefix: String,
        suffix_override: String,
    ) -> Option<Self> {
        let parsed = parse_value(&source_text)?;
        let decoration = Decoration::new(&source_text, &prefix, &suffix_override);

        Some(Self {
            element,
            source_text,
            target_value: parsed.value,
            prefix,
            suffix_override,
            decoration,
            phase: Phase::Pending,
        })
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix_override(&self) -> &str {
        &self.suffix_override
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the animation has begun. Never reverts.
    pub fn started(&self) -> bool {
        !matches!(self.phase, Phase::Pending)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Display string of the exact target.
    pub fn final_text(&self, locale: NumberLocale) -> String {
        self.decoration.render(self.target_value, locale)
    }

    /// Begin animating at `at`. Returns `false` if the entry already started.
    pub(crate) fn start(&mut self, at: f64) -> bool {
        if self.started() {
            return false;
        }
        self.phase = Phase::Animating { started_at: at };
        true
    }

    /// Text for the frame at `now`, or `None` when not animating.
    ///
    /// The frame that reaches full progress moves the entry to [`Phase::Done`].
    pub(crate) fn frame(
        &mut self,
        now: f64,
        duration_ms: f64,
        easing: Easing,
        locale: NumberLocale,
    ) -> Option<String> {
        let Phase::Animating { started_at } = self.phase else {
            return None;
        };

        let progress = if duration_ms <= 0.0 {
            1.0
        } else {
            ((now - started_at) / duration_ms).clamp(0.0, 1.0)
        };

        if progress >= 1.0 {
            self.phase = Phase::Done;
        }
        Some(self.text_at(progress, easing, locale))
    }

    /// Display text at linear `progress` in `[0, 1]`.
    ///
    /// Full progress renders the exact target rather than the eased value.
    pub fn text_at(&self, progress: f64, easing: Easing, locale: NumberLocale) -> String {
        if progress >= 1.0 {
            return self.final_text(locale);
        }
        let current = self.target_value * easing.apply(progress.max(0.0));
        self.decoration.render(current, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STD: NumberLocale = NumberLocale::Standard;

    fn entry(raw: &str, prefix: &str) -> StatEntry {
        StatEntry::new(ElementId(0), raw.to_string(), prefix.to_string(), String::new()).unwrap()
    }

    #[test]
    fn unparseable_values_are_not_tracked() {
        assert!(StatEntry::new(ElementId(0), "abc".into(), String::new(), String::new()).is_none());
    }

    #[test]
    fn pending_entries_do_not_render() {
        let mut stat = entry("150+", "");
        assert_eq!(stat.frame(500.0, 2_000.0, Easing::Linear, STD), None);
        assert!(!stat.started());
    }

    #[test]
    fn start_happens_once() {
        let mut stat = entry("150+", "");
        assert!(stat.start(100.0));
        assert!(!stat.start(200.0));
        assert_eq!(stat.phase(), Phase::Animating { started_at: 100.0 });
    }

    #[test]
    fn frames_follow_easing() {
        let mut stat = entry("200", "");
        stat.start(0.0);
        assert_eq!(stat.frame(0.0, 1_000.0, Easing::Linear, STD).as_deref(), Some("0"));
        assert_eq!(stat.frame(500.0, 1_000.0, Easing::Linear, STD).as_deref(), Some("100"));
        assert_eq!(stat.frame(500.0, 1_000.0, Easing::EaseOutCubic, STD).as_deref(), Some("175"));
    }

    #[test]
    fn final_frame_renders_exact_target() {
        let mut stat = entry("$5M", "$");
        stat.start(0.0);
        assert_eq!(stat.frame(2_500.0, 2_000.0, Easing::EaseOutCubic, STD).as_deref(), Some("$5M"));
        assert_eq!(stat.phase(), Phase::Done);
        assert!(stat.started());
        assert_eq!(stat.frame(2_600.0, 2_000.0, Easing::EaseOutCubic, STD), None);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut stat = entry("1.5K", "");
        stat.start(10.0);
        assert_eq!(stat.frame(10.0, 0.0, Easing::Linear, STD).as_deref(), Some("1.5K"));
        assert_eq!(stat.phase(), Phase::Done);
    }

    #[test]
    fn text_at_samples_without_starting() {
        let stat = entry("2K", "");
        assert_eq!(stat.text_at(0.0, Easing::Linear, STD), "0K");
        assert_eq!(stat.text_at(0.5, Easing::Linear, STD), "1K");
        assert_eq!(stat.text_at(1.0, Easing::Linear, STD), "2K");
        assert!(!stat.started());
    }
}
