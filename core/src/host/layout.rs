use std::collections::HashMap;

use moonshot_types::RootMargin;

use super::ElementId;

/// Axis-aligned box in document coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two boxes; `None` when they do not touch.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (right >= left && bottom >= top).then(|| Rect::new(left, top, right - left, bottom - top))
    }

    /// Grow (or with negative margins, shrink) the box on each side.
    pub fn expand(&self, margin: &RootMargin) -> Rect {
        Rect::new(
            self.x - margin.left,
            self.y - margin.top,
            self.width + margin.left + margin.right,
            self.height + margin.top + margin.bottom,
        )
    }
}

/// Fixed element geometry with a scrollable viewport.
///
/// Used where no rendering engine is available: tests and previews place
/// elements by hand and scroll the viewport over them.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    viewport: Rect,
    rects: HashMap<ElementId, Rect>,
}

impl StaticLayout {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            rects: HashMap::new(),
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        self.rects.insert(element, rect);
    }

    pub fn rect(&self, element: ElementId) -> Option<Rect> {
        self.rects.get(&element).copied()
    }

    /// Move the top of the viewport to `y`.
    pub fn scroll_to(&mut self, y: f64) {
        self.viewport.y = y;
    }

    pub fn scroll_by(&mut self, dy: f64) {
        self.viewport.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_overlapping_boxes() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 80.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 80.0, 50.0, 20.0)));
    }

    #[test]
    fn disjoint_boxes_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 20.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn negative_margin_shrinks_bottom() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let margin = RootMargin {
            bottom: -50.0,
            ..RootMargin::default()
        };
        assert_eq!(viewport.expand(&margin), Rect::new(0.0, 0.0, 800.0, 550.0));
    }

    #[test]
    fn scrolling_moves_viewport() {
        let mut layout = StaticLayout::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        layout.scroll_by(250.0);
        assert_eq!(layout.viewport().y, 250.0);
        layout.scroll_to(1_000.0);
        assert_eq!(layout.viewport().bottom(), 1_600.0);
    }
}
