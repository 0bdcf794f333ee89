use super::{ContainerVisibilityWatcher, Trigger};
use crate::host::{ElementId, StatHost};

/// Fallback watcher: fires [`Trigger::All`] on the first poll.
#[derive(Debug, Default)]
pub struct ImmediateWatcher {
    fired: bool,
    disconnected: bool,
}

impl ImmediateWatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerVisibilityWatcher for ImmediateWatcher {
    fn observe(&mut self, _container: ElementId) {}

    fn unobserve(&mut self, _container: ElementId) {}

    fn poll(&mut self, _host: &dyn StatHost) -> Vec<Trigger> {
        if self.fired || self.disconnected {
            return Vec::new();
        }
        self.fired = true;
        vec![Trigger::All]
    }

    fn disconnect(&mut self) {
        self.disconnected = true;
    }

    fn is_watching(&self) -> bool {
        !self.fired && !self.disconnected
    }
}
