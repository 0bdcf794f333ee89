//! Visibility-gated triggering of stat containers.
//!
//! A watcher decides *when* the stats inside a container may start. Two
//! implementations exist: [`IntersectionWatcher`] measures container
//! geometry against the viewport, [`ImmediateWatcher`] fires once for the
//! whole scope and is the fallback for hosts without layout.

mod immediate;
mod intersection;

pub use immediate::ImmediateWatcher;
pub use intersection::IntersectionWatcher;

use moonshot_types::VisibilityOptions;

use crate::host::{ElementId, StatHost};

/// Signal that stats may start animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// An observed container became visible
    Container(ElementId),
    /// Every stat in scope, ordered by discovery
    All,
}

/// Capability that turns observed containers into triggers.
pub trait ContainerVisibilityWatcher {
    /// Start watching `container`. Observing the same container twice is a no-op.
    fn observe(&mut self, container: ElementId);

    fn unobserve(&mut self, container: ElementId);

    /// Triggers that fired since the last poll.
    fn poll(&mut self, host: &dyn StatHost) -> Vec<Trigger>;

    /// Stop watching everything; no trigger fires afterwards.
    fn disconnect(&mut self);

    /// True while a future poll may still produce a trigger.
    fn is_watching(&self) -> bool;
}

/// Pick the watcher the host can support.
pub fn probe_watcher(
    host: &dyn StatHost,
    options: VisibilityOptions,
) -> Box<dyn ContainerVisibilityWatcher> {
    if host.viewport().is_some() {
        tracing::debug!(threshold = options.threshold, "Using intersection watcher");
        Box::new(IntersectionWatcher::new(options))
    } else {
        tracing::debug!("Host has no layout, stats start immediately");
        Box::new(ImmediateWatcher::new())
    }
}
