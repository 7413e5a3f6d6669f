//! Ordered element tree for generated descriptors.
//!
//! Elements are assembled bottom-up through [`ElementBuilder`] and cannot
//! be changed afterwards, so the order children were added in is the order
//! they are written in.

pub mod xml;

use indexmap::IndexMap;

/// Body of an element: nested elements or literal text, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Child elements, in emission order.
    Children(Vec<Element>),
    /// Literal text.
    Text(String),
}

/// A named node with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    content: Content,
}

impl Element {
    /// Starts building an element that holds children.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ElementBuilder {
        ElementBuilder { name: name.into(), attributes: IndexMap::new(), children: Vec::new() }
    }

    /// A text-only element such as `<Configuration>Debug</Configuration>`.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: IndexMap::new(), content: Content::Text(value.into()) }
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Looks up one attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The element's body.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Child elements; empty for text elements.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    /// Text body, if this is a text element.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    /// First child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children().iter().find(|c| c.name == name)
    }

    /// All children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children().iter().filter(move |c| c.name == name)
    }
}

/// Collects attributes and children for an [`Element`].
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
}

impl ElementBuilder {
    /// Adds an attribute. Setting a key twice keeps its first position.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a text child, shorthand for `child(Element::text(..))`.
    #[must_use]
    pub fn text_child(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.child(Element::text(name, value))
    }

    /// Appends a child only when `child` is `Some`.
    #[must_use]
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends every element from `children`.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Finishes the element.
    #[must_use]
    pub fn build(self) -> Element {
        Element {
            name: self.name,
            attributes: self.attributes,
            content: Content::Children(self.children),
        }
    }
}

/// A complete descriptor: one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wraps a root element.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }
}
