//! [`StatHost`] over a parsed HTML document.

use std::collections::HashMap;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use super::{ElementId, Rect, StatHost, StaticLayout};
use crate::error::StatsError;

/// A parsed HTML page with a text overlay for rendered stats.
///
/// The parsed tree is never mutated; text written through
/// [`StatHost::set_text`] is kept alongside it and takes precedence when read
/// back. Geometry is only available after [`HtmlDocument::with_layout`].
pub struct HtmlDocument {
    html: Html,
    /// `ElementId(i)` is the i-th element in document order
    elements: Vec<NodeId>,
    index: HashMap<NodeId, ElementId>,
    rendered: HashMap<ElementId, String>,
    layout: Option<StaticLayout>,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self::from_html(Html::parse_document(source))
    }

    fn from_html(html: Html) -> Self {
        let mut elements = Vec::new();
        let mut index = HashMap::new();
        for node in html.tree.root().descendants() {
            if node.value().is_element() {
                index.insert(node.id(), ElementId(elements.len()));
                elements.push(node.id());
            }
        }

        Self {
            html,
            elements,
            index,
            rendered: HashMap::new(),
            layout: None,
        }
    }

    /// Attach geometry, enabling visibility-gated triggering.
    pub fn with_layout(mut self, layout: StaticLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn layout_mut(&mut self) -> Option<&mut StaticLayout> {
        self.layout.as_mut()
    }

    /// The `<html>` element.
    pub fn root(&self) -> ElementId {
        self.id_of(self.html.root_element()).unwrap_or(ElementId(0))
    }

    /// Elements anywhere in the document matching `selector`.
    pub fn find(&self, selector: &str) -> Result<Vec<ElementId>, StatsError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .html
            .select(&selector)
            .filter_map(|el| self.id_of(el))
            .collect())
    }

    /// Text written by the animator, if any.
    pub fn rendered_text(&self, element: ElementId) -> Option<&str> {
        self.rendered.get(&element).map(String::as_str)
    }

    fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        let node_id = *self.elements.get(id.0)?;
        self.html.tree.get(node_id).and_then(ElementRef::wrap)
    }

    fn id_of(&self, element: ElementRef<'_>) -> Option<ElementId> {
        self.index.get(&element.id()).copied()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, StatsError> {
    Selector::parse(selector).map_err(|e| StatsError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl StatHost for HtmlDocument {
    fn select(&self, scope: ElementId, selector: &str) -> Result<Vec<ElementId>, StatsError> {
        let selector = parse_selector(selector)?;
        let Some(scope_el) = self.element(scope) else {
            return Ok(Vec::new());
        };
        Ok(scope_el
            .select(&selector)
            .filter(|el| el.id() != scope_el.id())
            .filter_map(|el| self.id_of(el))
            .collect())
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)?
            .value()
            .attr(name)
            .map(str::to_string)
    }

    fn closest(
        &self,
        element: ElementId,
        selector: &str,
    ) -> Result<Option<ElementId>, StatsError> {
        let selector = parse_selector(selector)?;
        let mut current = self.element(element);
        while let Some(el) = current {
            if selector.matches(&el) {
                return Ok(self.id_of(el));
            }
            current = el.parent().and_then(ElementRef::wrap);
        }
        Ok(None)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        let parent = self.element(element)?.parent().and_then(ElementRef::wrap)?;
        self.id_of(parent)
    }

    fn contains(&self, container: ElementId, element: ElementId) -> bool {
        if container == element {
            return true;
        }
        let (Some(&container_node), Some(el)) =
            (self.elements.get(container.0), self.element(element))
        else {
            return false;
        };
        el.ancestors().any(|node| node.id() == container_node)
    }

    fn text(&self, element: ElementId) -> String {
        if let Some(text) = self.rendered.get(&element) {
            return text.clone();
        }
        self.element(element)
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.rendered.insert(element, text.to_string());
    }

    fn viewport(&self) -> Option<Rect> {
        self.layout.as_ref().map(StaticLayout::viewport)
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        self.layout.as_ref()?.rect(element)
    }
}
