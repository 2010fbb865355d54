use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::Document;

/// [`Document`] over the live browser DOM.
///
/// DOM calls that can throw are treated like missing elements: the write is
/// dropped.
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Wrap the window's document.
    pub fn new(window: Window, document: web_sys::Document) -> Self {
        Self { window, document }
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create(&mut self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn append(&mut self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn clear(&mut self, node: &Element) {
        node.set_inner_html("");
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        let children = node.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attr(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
