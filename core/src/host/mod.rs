//! The host document a stats component reads from and renders into.
//!
//! The animator never touches a concrete DOM. It queries elements, reads
//! attributes and writes text through [`StatHost`], so the same state
//! machine runs against a browser binding, the bundled [`HtmlDocument`] or a
//! test double.

mod html;
mod layout;

pub use html::HtmlDocument;
pub use layout::{Rect, StaticLayout};

use crate::error::StatsError;

/// Opaque handle to an element of a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

/// Document access required by the stats component.
pub trait StatHost {
    /// Elements below `scope` matching `selector`, in document order.
    ///
    /// `scope` itself is never part of the result.
    fn select(&self, scope: ElementId, selector: &str) -> Result<Vec<ElementId>, StatsError>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Nearest inclusive ancestor of `element` matching `selector`.
    fn closest(&self, element: ElementId, selector: &str)
    -> Result<Option<ElementId>, StatsError>;

    /// Parent element, `None` at the document root.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// True when `element` is `container` or one of its descendants.
    fn contains(&self, container: ElementId, element: ElementId) -> bool;

    /// Current text content of `element`.
    fn text(&self, element: ElementId) -> String;

    fn set_text(&mut self, element: ElementId, text: &str);

    /// Visible area of the document, when the host can measure layout.
    ///
    /// Hosts returning `None` get the immediate-start fallback.
    fn viewport(&self) -> Option<Rect> {
        None
    }

    fn bounding_rect(&self, _element: ElementId) -> Option<Rect> {
        None
    }
}
