//! Document seam: the host page surface the controllers read and mutate.
//!
//! The crate never touches a real DOM. Everything it needs from the page —
//! selector queries, geometry, classes, form field access — goes through
//! [`Document`], so controllers stay unit-testable against an in-memory
//! implementation.

use crate::geometry::{Rect, Viewport};

/// Opaque handle to one element of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// Host page surface.
///
/// Geometry conventions: [`bounding_rect`](Document::bounding_rect) is
/// viewport-relative (it moves as the page scrolls), while
/// [`offset_top`](Document::offset_top) is document-relative and stable.
pub trait Document {
    /// First element matching a selector, if any.
    fn query(&self, selector: &str) -> Option<ElementId>;

    /// All elements matching a selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    /// All elements matching a selector within a subtree, in document order.
    fn query_within(&self, root: ElementId, selector: &str) -> Vec<ElementId>;

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Element bounds relative to the current viewport.
    fn bounding_rect(&self, element: ElementId) -> Rect;

    /// Element top edge relative to the document origin.
    fn offset_top(&self, element: ElementId) -> f32;

    /// Element's rendered height.
    fn client_height(&self, element: ElementId) -> f32;

    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f32;

    fn viewport(&self) -> Viewport;

    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Replace an element's text content.
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Current text content of an element.
    fn text(&self, element: ElementId) -> String;

    /// Current value of a form field.
    fn field_value(&self, element: ElementId) -> String;

    fn set_field_value(&mut self, element: ElementId, value: &str);

    /// Enable or disable an interactive control.
    fn set_enabled(&mut self, element: ElementId, enabled: bool);

    /// Show or hide an element.
    fn set_visible(&mut self, element: ElementId, visible: bool);
}
