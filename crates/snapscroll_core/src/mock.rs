//! In-memory DOM adapter
//!
//! A small node store implementing [`DomAdapter`] for tests and headless
//! runs. Geometry is not computed from layout; tests assign the offsets and
//! extents they want to observe.

use rustc_hash::FxHashMap;

use crate::dom::{Axis, DomAdapter, ElementId};

/// A pair of per-axis values.
#[derive(Clone, Copy, Debug, Default)]
struct PerAxis {
    vertical: Option<f32>,
    horizontal: Option<f32>,
}

impl PerAxis {
    fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        }
    }

    fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Vertical => self.vertical = Some(value),
            Axis::Horizontal => self.horizontal = Some(value),
        }
    }
}

#[derive(Debug, Default)]
struct Node {
    /// Selector this node answers to in `query`/`query_all`.
    selector: String,
    attributes: Vec<String>,
    classes: Vec<String>,
    css: FxHashMap<String, String>,
    children: Vec<ElementId>,
    local: PerAxis,
    viewport: PerAxis,
    extent: PerAxis,
    /// Currently applied scroll offset (the mock's `top`/`left`).
    offset: PerAxis,
}

/// In-memory [`DomAdapter`] implementation.
#[derive(Debug)]
pub struct MockDom {
    nodes: FxHashMap<ElementId, Node>,
    next_id: u64,
    transitions: bool,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// A mock without declarative-transition support (tween strategy).
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            next_id: 1,
            transitions: false,
        }
    }

    /// A mock reporting declarative-transition support.
    pub fn with_transitions() -> Self {
        Self {
            transitions: true,
            ..Self::new()
        }
    }

    /// Create a detached node answering to `selector`.
    pub fn create(&mut self, selector: &str) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                selector: selector.to_string(),
                ..Node::default()
            },
        );
        id
    }

    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    pub fn set_attribute(&mut self, el: ElementId, attribute: &str) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.attributes.push(attribute.to_string());
        }
    }

    pub fn set_local_offset(&mut self, el: ElementId, axis: Axis, px: f32) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.local.set(axis, px);
        }
    }

    pub fn set_viewport_offset(&mut self, el: ElementId, axis: Axis, px: f32) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.viewport.set(axis, px);
        }
    }

    pub fn set_extent(&mut self, el: ElementId, axis: Axis, px: f32) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.extent.set(axis, px);
        }
    }

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.nodes
            .get(&el)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    /// Build the usual scroller structure: a container with a `.sections`
    /// wrapper holding `count` `.section` children laid out back to back
    /// along `axis`, each `extent` pixels long. Returns the container.
    pub fn stacked(&mut self, count: usize, extent: f32, axis: Axis) -> ElementId {
        let container = self.create(".container");
        let wrapper = self.create(".sections");
        self.append_child(container, wrapper);
        self.set_extent(container, axis, extent);

        for i in 0..count {
            let section = self.create(".section");
            self.append_child(wrapper, section);
            self.set_local_offset(section, axis, i as f32 * extent);
            self.set_extent(section, axis, extent);
        }
        container
    }

    fn collect(&self, root: ElementId, selector: &str, out: &mut Vec<ElementId>) {
        let Some(node) = self.nodes.get(&root) else {
            return;
        };
        for &child in &node.children {
            if let Some(child_node) = self.nodes.get(&child) {
                if child_node.selector == selector {
                    out.push(child);
                }
            }
            self.collect(child, selector, out);
        }
    }
}

impl DomAdapter for MockDom {
    fn query(&self, root: ElementId, selector: &str) -> Option<ElementId> {
        self.query_all(root, selector).into_iter().next()
    }

    fn query_all(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect(root, selector, &mut out);
        out
    }

    fn marked(&self, attribute: &str) -> Vec<ElementId> {
        let mut out: Vec<ElementId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.attributes.iter().any(|a| a == attribute))
            .map(|(&id, _)| id)
            .collect();
        // Creation order stands in for document order.
        out.sort();
        out
    }

    fn css(&self, el: ElementId, property: &str) -> Option<String> {
        self.nodes.get(&el)?.css.get(property).cloned()
    }

    fn set_css(&mut self, el: ElementId, property: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.css.insert(property.to_string(), value.to_string());
        }
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&el) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.classes.retain(|c| c != class);
        }
    }

    fn local_offset(&self, el: ElementId, axis: Axis) -> Option<f32> {
        self.nodes.get(&el)?.local.get(axis)
    }

    fn viewport_offset(&self, el: ElementId, axis: Axis) -> Option<f32> {
        self.nodes.get(&el)?.viewport.get(axis)
    }

    fn extent(&self, el: ElementId, axis: Axis) -> f32 {
        self.nodes
            .get(&el)
            .and_then(|node| node.extent.get(axis))
            .unwrap_or(0.0)
    }

    fn offset(&self, el: ElementId, axis: Axis) -> f32 {
        self.nodes
            .get(&el)
            .and_then(|node| node.offset.get(axis))
            .unwrap_or(0.0)
    }

    fn set_offset(&mut self, el: ElementId, axis: Axis, px: f32) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.offset.set(axis, px);
        }
    }

    fn supports_transitions(&self) -> bool {
        self.transitions
    }

    fn append_list(
        &mut self,
        root: ElementId,
        class: &str,
        items: usize,
    ) -> (ElementId, Vec<ElementId>) {
        let list = self.create(&format!(".{class}"));
        self.add_class(list, class);
        self.append_child(root, list);

        let handles: Vec<ElementId> = (0..items)
            .map(|_| {
                let item = self.create("li");
                self.append_child(list, item);
                item
            })
            .collect();
        (list, handles)
    }
}
