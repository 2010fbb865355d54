//! View binding: the narrow slice of the DOM the renderers touch.
//!
//! Renderers never assume an element exists. Every lookup returns an
//! `Option`, and a missing target turns the write into a no-op, so one
//! renderer can run against either page template.

pub mod ids;
mod memory;
mod template;

pub use memory::*;
pub use template::*;

/// A document the page pipeline can read and write.
///
/// `Node` is a cheap handle (an arena index in memory, a JS reference in the
/// browser). Mutating methods take `&mut self` even where the backend could
/// get away with `&self`, so the in-memory document needs no interior
/// mutability.
pub trait Document {
    /// Element handle.
    type Node: Clone;

    /// Element with the given `id`.
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element matching a simple selector: `#id`, `.class` or a tag name.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;

    /// Create a detached element.
    fn create(&mut self, tag: &str) -> Option<Self::Node>;

    /// Append `child` as the last child of `parent`.
    fn append(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Remove all children and content of `node`.
    fn clear(&mut self, node: &Self::Node);

    /// Element children of `node`, in order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Replace the content of `node` with plain text.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Replace the content of `node` with markup.
    fn set_html(&mut self, node: &Self::Node, html: &str);

    /// Attribute value.
    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Add a class (no-op if present).
    fn add_class(&mut self, node: &Self::Node, class: &str);

    /// Remove a class (no-op if absent).
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Whether `node` carries `class`.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Set an inline style property. An empty value removes it.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Set the document title.
    fn set_title(&mut self, title: &str);

    /// Smooth-scroll the window back to the top.
    fn scroll_to_top(&mut self);

    /// Add or remove `class` depending on `on`.
    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Set the text of the element with `id`, if it exists.
    fn set_text_by_id(&mut self, id: &str, text: &str) -> bool {
        match self.by_id(id) {
            Some(node) => {
                self.set_text(&node, text);
                true
            }
            None => false,
        }
    }

    /// Set the markup of the element with `id`, if it exists.
    fn set_html_by_id(&mut self, id: &str, html: &str) -> bool {
        match self.by_id(id) {
            Some(node) => {
                self.set_html(&node, html);
                true
            }
            None => false,
        }
    }

    /// Set an attribute on the element with `id`, if it exists.
    fn set_attr_by_id(&mut self, id: &str, name: &str, value: &str) -> bool {
        match self.by_id(id) {
            Some(node) => {
                self.set_attr(&node, name, value);
                true
            }
            None => false,
        }
    }
}
