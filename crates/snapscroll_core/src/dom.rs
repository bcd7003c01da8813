//! DOM adapter seam
//!
//! The scroller never touches a real document. Everything it needs from the
//! platform — selector queries, geometry reads, CSS writes, pagination
//! markup — goes through the [`DomAdapter`] trait, with elements referred to
//! by opaque [`ElementId`] handles. The embedder supplies the real
//! implementation; [`crate::mock::MockDom`] supplies the in-memory one used
//! by tests and headless runs.

/// Opaque handle to a platform element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Scroll axis of the widget.
///
/// Maps onto CSS geometry: `Vertical` reads/writes `top` offsets and element
/// heights, `Horizontal` reads/writes `left` offsets and widths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// CSS offset property animated along this axis.
    pub fn offset_property(&self) -> &'static str {
        match self {
            Axis::Vertical => "top",
            Axis::Horizontal => "left",
        }
    }

    /// CSS transform moving an element `px` pixels along this axis.
    pub fn translate(&self, px: f32) -> String {
        match self {
            Axis::Vertical => format!("translateY({px}px)"),
            Axis::Horizontal => format!("translateX({px}px)"),
        }
    }

    /// Orientation class the pagination list carries.
    pub fn orientation_class(&self) -> &'static str {
        match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        }
    }
}

/// Platform collaborator for document structure, geometry, and styling.
///
/// Geometry follows the conventions of the usual DOM libraries:
/// [`local_offset`](DomAdapter::local_offset) is the position relative to the
/// nearest positioned ancestor, [`viewport_offset`](DomAdapter::viewport_offset)
/// is relative to the viewport origin.
pub trait DomAdapter {
    /// First descendant of `root` matching `selector`.
    fn query(&self, root: ElementId, selector: &str) -> Option<ElementId>;

    /// All descendants of `root` matching `selector`, in document order.
    fn query_all(&self, root: ElementId, selector: &str) -> Vec<ElementId>;

    /// All elements in the document carrying `attribute`, in document order.
    fn marked(&self, attribute: &str) -> Vec<ElementId>;

    /// Read a CSS property. `None` when unset.
    fn css(&self, el: ElementId, property: &str) -> Option<String>;

    /// Write a CSS property.
    fn set_css(&mut self, el: ElementId, property: &str, value: &str);

    fn add_class(&mut self, el: ElementId, class: &str);

    fn remove_class(&mut self, el: ElementId, class: &str);

    /// Offset of `el` relative to its positioned ancestor, along `axis`.
    /// `None` when the element has no layout box.
    fn local_offset(&self, el: ElementId, axis: Axis) -> Option<f32>;

    /// Offset of `el` relative to the viewport origin, along `axis`.
    fn viewport_offset(&self, el: ElementId, axis: Axis) -> Option<f32>;

    /// Inner extent (height or width) of `el` along `axis`.
    fn extent(&self, el: ElementId, axis: Axis) -> f32;

    /// Currently applied scroll offset of `el` along `axis`, in pixels.
    fn offset(&self, el: ElementId, axis: Axis) -> f32;

    /// Move `el` to `px` along `axis` immediately, without a transition.
    fn set_offset(&mut self, el: ElementId, axis: Axis, px: f32);

    /// Whether the platform can run declarative CSS transitions.
    ///
    /// Probed once at startup to pick the animation strategy; never consulted
    /// per transition.
    fn supports_transitions(&self) -> bool;

    /// Append a list element with `items` children to `root`, both plain.
    /// Returns the list handle and the item handles in order.
    fn append_list(&mut self, root: ElementId, class: &str, items: usize)
        -> (ElementId, Vec<ElementId>);
}
