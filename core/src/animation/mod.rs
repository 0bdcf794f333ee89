//! Frame-driven counter animation for stat elements.
//!
//! [`AnimatedStats`] owns one [`StatEntry`] per discovered element and a
//! visibility watcher. Each call to [`AnimatedStats::advance`] is one display
//! frame:
//!
//! 1. poll the watcher and schedule staggered starts for triggered stats
//! 2. start every stat whose delay has elapsed
//! 3. render the current value of every animating stat
//!
//! Nothing here reads a clock. Timestamps come from the caller, usually via
//! a [`Scheduler`], so the whole state machine can be stepped in tests.

mod entry;
mod scheduler;


pub use entry::{Phase, StatEntry};
pub use scheduler::{ManualScheduler, RealtimeScheduler, Scheduler};

use moonshot_types::{NumberLocale, StatsConfig};

use crate::error::StatsError;
use crate::host::{ElementId, StatHost};
use crate::locale::detect_number_locale;
use crate::visibility::{ContainerVisibilityWatcher, Trigger, probe_watcher};

/// A start waiting for its stagger delay.
#[derive(Debug, Clone, Copy)]
struct ScheduledStart {
    due: f64,
    /// Tie-breaker keeping equal deadlines in scheduling order
    seq: u64,
    entry: usize,
}

/// Animated counters for every stat below one scope element.
pub struct AnimatedStats {
    config: StatsConfig,
    locale: NumberLocale,
    entries: Vec<StatEntry>,
    watcher: Option<Box<dyn ContainerVisibilityWatcher>>,
    scheduled: Vec<ScheduledStart>,
    next_seq: u64,
}

impl AnimatedStats {
    /// Discover stats below `scope`, choosing the watcher the host supports.
    pub fn new(
        host: &dyn StatHost,
        scope: ElementId,
        config: StatsConfig,
    ) -> Result<Self, StatsError> {
        let watcher = probe_watcher(host, config.visibility);
        Self::with_watcher(host, scope, config, watcher)
    }

    /// Discover stats below `scope` using an explicit watcher.
    pub fn with_watcher(
        host: &dyn StatHost,
        scope: ElementId,
        config: StatsConfig,
        mut watcher: Box<dyn ContainerVisibilityWatcher>,
    ) -> Result<Self, StatsError> {
        // Surface bad container and group selectors even when no stat is found
        host.closest(scope, &config.container_selector)?;
        host.closest(scope, &config.group_selector)?;

        let mut entries = Vec::new();
        for element in host.select(scope, &config.selector)? {
            let raw = host
                .attribute(element, &config.value_attribute)
                .unwrap_or_default();
            let prefix = host
                .attribute(element, &config.prefix_attribute)
                .unwrap_or_default();
            let suffix = host
                .attribute(element, &config.suffix_attribute)
                .unwrap_or_default();

            match StatEntry::new(element, raw.clone(), prefix, suffix) {
                Some(entry) => entries.push(entry),
                None => tracing::debug!(element = element.0, raw = %raw, "Skipping stat without a value"),
            }
        }

        for entry in &entries {
            let container = match host.closest(entry.element(), &config.container_selector)? {
                Some(container) => Some(container),
                None => host.parent(entry.element()),
            };
            if let Some(container) = container {
                watcher.observe(container);
            }
        }

        let locale = config.number_locale.unwrap_or_else(detect_number_locale);
        tracing::debug!(count = entries.len(), ?locale, "Discovered stats");

        Ok(Self {
            config,
            locale,
            entries,
            watcher: Some(watcher),
            scheduled: Vec::new(),
            next_seq: 0,
        })
    }

    pub fn entries(&self) -> &[StatEntry] {
        &self.entries
    }

    pub fn entry(&self, element: ElementId) -> Option<&StatEntry> {
        self.entries.iter().find(|e| e.element() == element)
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    /// True while a start is pending or a stat is mid-animation.
    pub fn is_animating(&self) -> bool {
        !self.scheduled.is_empty() || self.entries.iter().any(StatEntry::is_animating)
    }

    /// True when no further frame can change any stat.
    pub fn is_settled(&self) -> bool {
        !self.is_animating() && !self.watcher.as_ref().is_some_and(|w| w.is_watching())
    }

    /// Process one frame at `now` (milliseconds). Returns how many stats were rendered.
    pub fn advance(&mut self, now: f64, host: &mut dyn StatHost) -> usize {
        self.poll_triggers(now, &*host);
        self.start_due(now);
        self.render(now, host)
    }

    /// Drive frames from `scheduler` until nothing is pending or animating.
    ///
    /// Always runs at least one frame, so an immediately visible container
    /// gets its chance to trigger. Returns the number of frames processed.
    pub fn run_until_idle<S: Scheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        host: &mut dyn StatHost,
    ) -> usize {
        let mut frames = 0;
        loop {
            let now = scheduler.next_frame();
            self.advance(now, host);
            frames += 1;
            if !self.is_animating() {
                return frames;
            }
        }
    }

    /// Detach the visibility watcher.
    ///
    /// Containers that have not triggered yet never will. Stats already
    /// scheduled or animating still run to completion.
    pub fn destroy(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.disconnect();
            tracing::debug!("Stats watcher disconnected");
        }
    }

    fn poll_triggers(&mut self, now: f64, host: &dyn StatHost) {
        let Some(watcher) = self.watcher.as_mut() else {
            return;
        };
        let triggers = watcher.poll(host);

        for trigger in triggers {
            let members: Vec<usize> = match trigger {
                Trigger::All => (0..self.entries.len())
                    .filter(|&i| !self.entries[i].started())
                    .collect(),
                Trigger::Container(observed) => {
                    if let Some(watcher) = self.watcher.as_mut() {
                        watcher.unobserve(observed);
                    }
                    let group = match host.closest(observed, &self.config.group_selector) {
                        Ok(Some(group)) => group,
                        _ => observed,
                    };
                    tracing::debug!(container = observed.0, group = group.0, "Stats container visible");

                    (0..self.entries.len())
                        .filter(|&i| {
                            let entry = &self.entries[i];
                            !entry.started() && host.contains(group, entry.element())
                        })
                        .collect()
                }
            };
            self.schedule(now, &members);
        }
    }

    /// Queue starts for `members` at the start delay plus one stagger step per position.
    fn schedule(&mut self, now: f64, members: &[usize]) {
        let start_delay = self.config.start_delay_ms as f64;
        let stagger = self.config.stagger_delay_ms as f64;

        for (position, &entry) in members.iter().enumerate() {
            self.scheduled.push(ScheduledStart {
                due: now + start_delay + position as f64 * stagger,
                seq: self.next_seq,
                entry,
            });
            self.next_seq += 1;
        }
    }

    fn start_due(&mut self, now: f64) {
        self.scheduled
            .sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        let ready = self.scheduled.partition_point(|s| s.due <= now);

        for start in self.scheduled.drain(..ready) {
            let entry = &mut self.entries[start.entry];
            if entry.start(start.due) {
                tracing::trace!(element = entry.element().0, at = start.due, "Stat animation started");
            }
        }
    }

    fn render(&mut self, now: f64, host: &mut dyn StatHost) -> usize {
        let duration = self.config.duration_ms as f64;
        let easing = self.config.easing;
        let mut rendered = 0;

        for entry in &mut self.entries {
            let Some(text) = entry.frame(now, duration, easing, self.locale) else {
                continue;
            };
            host.set_text(entry.element(), &text);
            rendered += 1;

            if entry.phase() == Phase::Done {
                tracing::debug!(element = entry.element().0, text = %text, "Stat animation finished");
            } else {
                tracing::trace!(element = entry.element().0, text = %text, "Stat frame");
            }
        }

        rendered
    }
}
