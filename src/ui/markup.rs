//! Markup tree produced by the view and consumed by a render surface.
//!
//! Elements carry a class name, an `active` mark and, for buttons, the key
//! they stand for. Surfaces decide how each class looks.

use crate::phone::keys::PhoneKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub class: &'static str,
    pub active: bool,
    pub key: Option<PhoneKey>,
    pub children: Vec<Node>,
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Element {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            active: false,
            key: None,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn key(mut self, key: PhoneKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Element children only, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First element with `class`, depth-first, starting with `self`.
    pub fn find(&self, class: &str) -> Option<&Element> {
        if self.class == class {
            return Some(self);
        }
        self.elements().find_map(|child| child.find(class))
    }

    /// Every element with `class`, in document order.
    pub fn find_all(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(class, &mut found);
        found
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.class == class {
            found.push(self);
        }
        for child in self.elements() {
            child.collect(class, found);
        }
    }

    /// Concatenated text of the whole subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.push_text(out),
            }
        }
    }
}
