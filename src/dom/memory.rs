//! In-memory document used by tests and the preview binary.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::Document;

/// Handle to a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Content set directly on a node (as opposed to element children).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Content {
    #[default]
    Empty,
    Text(String),
    Html(String),
}

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    content: Content,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// Arena-backed element tree. The root is `<body>`.
///
/// Markup written with `set_html` is stored verbatim and not parsed; it is
/// opaque to queries. Replacing a node's content frees its old subtree, and
/// handles into that subtree are invalid afterwards.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
    free: Vec<NodeId>,
    title: String,
    scroll_to_top_calls: usize,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    const ROOT: NodeId = NodeId(0);

    /// Empty document containing only `<body>`.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                tag: "body".to_string(),
                ..NodeData::default()
            }],
            free: Vec::new(),
            title: String::new(),
            scroll_to_top_calls: 0,
        }
    }

    /// Append a new element under `parent` and return it.
    pub fn add(&mut self, parent: NodeId, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let node = self.alloc(tag);
        if let Some(id) = id {
            self.nodes[node.0].attrs.insert("id".to_string(), id.to_string());
        }
        self.nodes[node.0].classes = classes.iter().map(|c| c.to_string()).collect();
        self.attach(parent, node);
        node
    }

    /// The root `<body>` node.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Current document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// How many times `scroll_to_top` was requested.
    pub fn scroll_to_top_calls(&self) -> usize {
        self.scroll_to_top_calls
    }

    /// Text content of `node` and its descendants. Markup is returned raw.
    pub fn text(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    /// Markup set with `set_html`, if that is the node's content.
    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].content {
            Content::Html(html) => Some(html),
            _ => None,
        }
    }

    /// Inline style value.
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].styles.get(property).map(String::as_str)
    }

    /// Classes on `node`, in insertion order.
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].classes
    }

    /// Attached elements carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|n| self.nodes[n.0].classes.iter().any(|c| c == class))
            .collect()
    }

    /// Text of the element with `id`, or `None` if it does not exist.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.by_id(id).map(|n| self.text(n))
    }

    /// Serialize the attached tree as indented HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if !self.title.is_empty() {
            let _ = writeln!(out, "<title>{}</title>", self.title);
        }
        self.write_node(Self::ROOT, 0, &mut out);
        out
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        let data = NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        };
        match self.free.pop() {
            Some(node) => {
                self.nodes[node.0] = data;
                node
            }
            None => {
                self.nodes.push(data);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.release(child);
        }
    }

    /// Return `node` and its descendants to the free list.
    fn release(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            let data = std::mem::take(&mut self.nodes[n.0]);
            stack.extend(data.children);
            self.free.push(n);
        }
    }

    fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![Self::ROOT];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        order
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let data = &self.nodes[node.0];
        match &data.content {
            Content::Empty => {}
            Content::Text(text) | Content::Html(text) => out.push_str(text),
        }
        for child in &data.children {
            self.collect_text(*child, out);
        }
    }

    fn write_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let data = &self.nodes[node.0];
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{}<{}", indent, data.tag);
        if let Some(id) = data.attrs.get("id") {
            let _ = write!(out, " id=\"{}\"", id);
        }
        if !data.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", data.classes.join(" "));
        }
        for (name, value) in data.attrs.iter().filter(|(k, _)| *k != "id") {
            let _ = write!(out, " {}=\"{}\"", name, value);
        }
        if !data.styles.is_empty() {
            let style = data
                .styles
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", style);
        }
        out.push('>');

        let inline = match &data.content {
            Content::Empty => None,
            Content::Text(text) | Content::Html(text) => Some(text.as_str()),
        };
        if data.children.is_empty() {
            let _ = writeln!(out, "{}</{}>", inline.unwrap_or(""), data.tag);
            return;
        }
        out.push('\n');
        if let Some(inline) = inline {
            let _ = writeln!(out, "{}  {}", indent, inline);
        }
        for child in &data.children {
            self.write_node(*child, depth + 1, out);
        }
        let _ = writeln!(out, "{}</{}>", indent, data.tag);
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|n| self.nodes[n.0].attrs.get("id").is_some_and(|v| v == id))
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        if let Some(id) = selector.strip_prefix('#') {
            return self.by_id(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return self.find_all_by_class(class).into_iter().next();
        }
        let tag = selector.to_ascii_lowercase();
        self.document_order()
            .into_iter()
            .find(|n| self.nodes[n.0].tag == tag)
    }

    fn body(&self) -> Option<NodeId> {
        Some(Self::ROOT)
    }

    fn create(&mut self, tag: &str) -> Option<NodeId> {
        Some(self.alloc(tag))
    }

    fn append(&mut self, parent: &NodeId, child: &NodeId) {
        if parent == child {
            return;
        }
        self.attach(*parent, *child);
    }

    fn clear(&mut self, node: &NodeId) {
        self.detach_children(*node);
        self.nodes[node.0].content = Content::Empty;
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes[node.0].children.clone()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.detach_children(*node);
        self.nodes[node.0].content = Content::Text(text.to_string());
    }

    fn set_html(&mut self, node: &NodeId, html: &str) {
        self.detach_children(*node);
        self.nodes[node.0].content = Content::Html(html.to_string());
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        if name == "class" {
            let classes = &self.nodes[node.0].classes;
            return (!classes.is_empty()).then(|| classes.join(" "));
        }
        self.nodes[node.0].attrs.get(name).cloned()
    }

    fn set_attr(&mut self, node: &NodeId, name: &str, value: &str) {
        if name == "class" {
            self.nodes[node.0].classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        self.nodes[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let classes = &mut self.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let styles = &mut self.nodes[node.0].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_to_top_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_only_see_attached_nodes() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let grid = doc.add(root, "div", Some("grid"), &["grid"]);
        let card = doc.add(grid, "a", Some("card"), &["card"]);

        assert_eq!(doc.by_id("card"), Some(card));
        doc.clear(&grid);
        assert_eq!(doc.by_id("card"), None);
        assert_eq!(doc.query(".grid"), Some(grid));
        assert!(doc.children(&grid).is_empty());
    }

    #[test]
    fn cleared_subtrees_are_recycled() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let grid = doc.add(root, "div", Some("grid"), &[]);

        for _ in 0..5 {
            doc.clear(&grid);
            for i in 0..10 {
                let card = doc.add(grid, "a", Some(&format!("card-{}", i)), &["card"]);
                doc.add(card, "img", None, &[]);
            }
        }
        assert_eq!(doc.nodes.len(), 22);
        assert_eq!(doc.children(&grid).len(), 10);
        assert_eq!(doc.find_all_by_class("card").len(), 10);

        // Fresh slots carry nothing over from their previous owner.
        let card = doc.by_id("card-3").unwrap();
        let img = doc.children(&card)[0];
        assert!(doc.attr(&img, "id").is_none());
        assert!(doc.classes(img).is_empty());
    }

    #[test]
    fn set_text_replaces_children() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let header = doc.add(root, "header", None, &["project-header"]);
        doc.add(header, "h1", Some("title"), &[]);

        doc.set_text(&header, "hello");
        assert_eq!(doc.text(header), "hello");
        assert!(doc.by_id("title").is_none());
    }

    #[test]
    fn class_helpers_are_idempotent() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let nav = doc.add(root, "nav", None, &[]);

        doc.add_class(&nav, "scrolled");
        doc.add_class(&nav, "scrolled");
        assert_eq!(doc.classes(nav), &["scrolled".to_string()]);
        doc.set_class(&nav, "scrolled", false);
        assert!(!doc.has_class(&nav, "scrolled"));
        assert_eq!(doc.query("nav"), Some(nav));
    }

    #[test]
    fn empty_style_removes_property() {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        doc.set_style(&body, "overflow", "hidden");
        assert_eq!(doc.style(body, "overflow"), Some("hidden"));
        doc.set_style(&body, "overflow", "");
        assert_eq!(doc.style(body, "overflow"), None);
    }

    #[test]
    fn html_dump_includes_attributes() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let link = doc.add(root, "a", Some("email-link"), &["btn"]);
        doc.set_attr(&link, "href", "mailto:me@example.com");
        doc.set_text(&link, "me@example.com");
        doc.set_title("Home");

        let html = doc.to_html();
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains(
            r#"<a id="email-link" class="btn" href="mailto:me@example.com">me@example.com</a>"#
        ));
    }
}
