//! HTML node tree
//!
//! This module defines the markup nodes produced by lowering inline text and
//! grouped by block-level callers. Only [`LeafNode`] and [`ParentNode`] can be
//! rendered; [`HtmlNode`] is the shared shape both of them fit into.

use std::fmt;

use indexmap::IndexMap;

/// Attribute name to value, kept in insertion order
pub type Attributes = IndexMap<String, String>;

/// The base shape shared by every markup node.
///
/// All fields are independently optional and nothing is validated here.
/// This type has no rendering contract of its own; render a [`LeafNode`] or
/// [`ParentNode`] instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlNode {
    /// Element name; `None` means the value is emitted without a wrapping element
    pub tag: Option<String>,

    /// Text content
    pub value: Option<String>,

    /// Child nodes in render order
    pub children: Option<Vec<Node>>,

    /// Attributes of the opening tag
    pub attributes: Option<Attributes>,
}

impl HtmlNode {
    pub fn new(
        tag: Option<String>,
        value: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            value,
            children,
            attributes,
        }
    }

    /// Serialize the attributes for inclusion right after the tag name
    pub fn attributes_to_markup(&self) -> String {
        crate::render::attributes_to_markup(self.attributes.as_ref())
    }
}

/// A node with text content and no children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeafNode {
    pub tag: Option<String>,
    /// Required when rendering
    pub value: Option<String>,
    pub attributes: Option<Attributes>,
}

impl LeafNode {
    pub fn new(tag: Option<String>, value: Option<String>, attributes: Option<Attributes>) -> Self {
        Self {
            tag,
            value,
            attributes,
        }
    }

    /// Create a leaf that renders its value without a wrapping element
    pub fn text(value: &str) -> Self {
        Self::new(None, Some(value.to_string()), None)
    }

    /// Create a leaf wrapped in `tag`, without attributes
    pub fn tagged(tag: &str, value: &str) -> Self {
        Self::new(Some(tag.to_string()), Some(value.to_string()), None)
    }

    pub fn attributes_to_markup(&self) -> String {
        crate::render::attributes_to_markup(self.attributes.as_ref())
    }
}

/// A node whose content is the concatenated markup of its children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParentNode {
    pub tag: Option<String>,
    /// Required (and non-empty) when rendering
    pub children: Option<Vec<Node>>,
    pub attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(
        tag: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            children,
            attributes,
        }
    }

    /// Create a parent wrapped in `tag`, without attributes
    pub fn tagged(tag: &str, children: Vec<Node>) -> Self {
        Self::new(Some(tag.to_string()), Some(children), None)
    }

    /// Append a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.get_or_insert_with(Vec::new).push(child.into());
    }

    pub fn attributes_to_markup(&self) -> String {
        crate::render::attributes_to_markup(self.attributes.as_ref())
    }
}

/// A renderable node: either a leaf or a parent
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        Self::new(leaf.tag, leaf.value, None, leaf.attributes)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        Self::new(parent.tag, None, parent.children, parent.attributes)
    }
}

impl From<Node> for HtmlNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Leaf(leaf) => leaf.into(),
            Node::Parent(parent) => parent.into(),
        }
    }
}

/// Writes an optional field, or `None` when absent
struct Field<'a, T: ?Sized>(Option<&'a T>);

impl fmt::Display for Field<'_, str> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(s) => f.write_str(s),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Field<'_, [Node]> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(children) = self.0 else {
            return f.write_str("None");
        };

        f.write_str("[")?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", child)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Field<'_, Attributes> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(attributes) => write!(f, "{:?}", attributes),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HtmlNode({}, {}, {}, {})",
            Field(self.tag.as_deref()),
            Field(self.value.as_deref()),
            Field(self.children.as_deref()),
            Field(self.attributes.as_ref()),
        )
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeafNode({}, {}, {})",
            Field(self.tag.as_deref()),
            Field(self.value.as_deref()),
            Field(self.attributes.as_ref()),
        )
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParentNode({}, {}, {})",
            Field(self.tag.as_deref()),
            Field(self.children.as_deref()),
            Field(self.attributes.as_ref()),
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            Node::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}
