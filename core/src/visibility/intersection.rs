use moonshot_types::VisibilityOptions;

use super::{ContainerVisibilityWatcher, Trigger};
use crate::host::{ElementId, Rect, StatHost};

/// Watcher that fires when enough of a container is inside the viewport.
#[derive(Debug)]
pub struct IntersectionWatcher {
    options: VisibilityOptions,
    /// In observation order, without duplicates
    observed: Vec<ElementId>,
}

impl IntersectionWatcher {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
        }
    }

    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    fn is_visible(&self, root: &Rect, target: &Rect) -> bool {
        let Some(overlap) = target.intersection(root) else {
            return false;
        };
        // A zero-area target inside the root counts as fully visible
        let ratio = if target.area() == 0.0 {
            1.0
        } else {
            overlap.area() / target.area()
        };
        ratio >= self.options.threshold
    }
}

impl ContainerVisibilityWatcher for IntersectionWatcher {
    fn observe(&mut self, container: ElementId) {
        if !self.observed.contains(&container) {
            self.observed.push(container);
        }
    }

    fn unobserve(&mut self, container: ElementId) {
        self.observed.retain(|&c| c != container);
    }

    fn poll(&mut self, host: &dyn StatHost) -> Vec<Trigger> {
        let Some(viewport) = host.viewport() else {
            return Vec::new();
        };
        let root = viewport.expand(&self.options.root_margin);

        self.observed
            .iter()
            .filter(|&&container| {
                host.bounding_rect(container)
                    .is_some_and(|rect| self.is_visible(&root, &rect))
            })
            .map(|&container| Trigger::Container(container))
            .collect()
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }

    fn is_watching(&self) -> bool {
        !self.observed.is_empty()
    }
}
