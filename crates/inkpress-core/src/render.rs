//! HTML serialization
//!
//! Converts renderable nodes into a single HTML string. Rendering is
//! all-or-nothing: the first invalid node in document order aborts the
//! whole render.

use log::{debug, trace};

use crate::node::{Attributes, LeafNode, Node, ParentNode};
use crate::{Error, Result};

/// Render a node to markup
pub trait ToHtml {
    /// Append this node's markup to `out`
    fn write_html(&self, out: &mut String) -> Result<()>;

    /// Render this node to a new string
    fn to_html(&self) -> Result<String> {
        let mut output = String::new();
        self.write_html(&mut output)?;
        Ok(output)
    }
}

/// Render a node tree to an HTML string
pub fn render(node: &Node) -> Result<String> {
    node.to_html()
}

/// Serialize attributes as ` name="value"` pairs in insertion order.
///
/// Returns an empty string when there are no attributes, so the result can
/// follow a tag name directly.
pub fn attributes_to_markup(attributes: Option<&Attributes>) -> String {
    let mut out = String::new();
    write_attributes(attributes, &mut out);
    out
}

fn write_attributes(attributes: Option<&Attributes>, out: &mut String) {
    let Some(attributes) = attributes else {
        return;
    };

    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn write_open_tag(tag: &str, attributes: Option<&Attributes>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, out);
    out.push('>');
}

fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl ToHtml for LeafNode {
    fn write_html(&self, out: &mut String) -> Result<()> {
        let Some(value) = self.value.as_deref() else {
            debug!("rejecting leaf node without value: {}", self);
            return Err(Error::MissingValue {
                tag: self.tag.clone(),
            });
        };

        match self.tag.as_deref() {
            None => out.push_str(value),
            Some(tag) => {
                write_open_tag(tag, self.attributes.as_ref(), out);
                out.push_str(value);
                write_close_tag(tag, out);
            }
        }

        trace!("rendered leaf node {:?}", self.tag);
        Ok(())
    }
}

impl ToHtml for ParentNode {
    fn write_html(&self, out: &mut String) -> Result<()> {
        let children = match self.children.as_deref() {
            Some(children) if !children.is_empty() => children,
            _ => {
                debug!("rejecting parent node without children: {:?}", self.tag);
                return Err(Error::MissingChildren {
                    tag: self.tag.clone(),
                });
            }
        };

        // A tag-less parent emits its children as a bare fragment
        let tag = self.tag.as_deref();
        if let Some(tag) = tag {
            write_open_tag(tag, self.attributes.as_ref(), out);
        }
        for child in children {
            child.write_html(out)?;
        }
        if let Some(tag) = tag {
            write_close_tag(tag, out);
        }

        trace!(
            "rendered parent node {:?} with {} children",
            self.tag,
            children.len()
        );
        Ok(())
    }
}

impl ToHtml for Node {
    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf(leaf) => leaf.write_html(out),
            Node::Parent(parent) => parent.write_html(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlNode;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_attributes_empty() {
        assert_eq!(attributes_to_markup(None), "");
        assert_eq!(attributes_to_markup(Some(&Attributes::new())), "");
    }

    #[test]
    fn test_attributes_insertion_order() {
        let attributes = attrs(&[("target", "_blank"), ("href", "u")]);
        assert_eq!(
            attributes_to_markup(Some(&attributes)),
            r#" target="_blank" href="u""#
        );
    }

    #[test]
    fn test_attributes_are_not_colon_separated() {
        let node = HtmlNode::new(
            Some("p".to_string()),
            None,
            None,
            Some(attrs(&[("href", "https://example.com"), ("target", "_blank")])),
        );
        assert_ne!(
            node.attributes_to_markup(),
            r#" href:"https://example.com" target:"_blank""#
        );
    }

    #[test]
    fn test_leaf_without_tag() {
        let leaf = LeafNode::text("hello");
        assert_eq!(leaf.to_html().unwrap(), "hello");
    }

    #[test]
    fn test_leaf_without_tag_ignores_attributes() {
        let leaf = LeafNode::new(None, Some("hello".to_string()), Some(attrs(&[("id", "x")])));
        assert_eq!(leaf.to_html().unwrap(), "hello");
    }

    #[test]
    fn test_leaf_with_tag() {
        let leaf = LeafNode::tagged("p", "This is a paragraph");
        assert_eq!(leaf.to_html().unwrap(), "<p>This is a paragraph</p>");
    }

    #[test]
    fn test_leaf_with_attributes() {
        let leaf = LeafNode::new(
            Some("a".to_string()),
            Some("hi".to_string()),
            Some(attrs(&[("href", "u")])),
        );
        assert_eq!(leaf.to_html().unwrap(), r#"<a href="u">hi</a>"#);
    }

    #[test]
    fn test_leaf_empty_value_is_rendered() {
        let leaf = LeafNode::new(
            Some("img".to_string()),
            Some(String::new()),
            Some(attrs(&[("src", "i.png"), ("alt", "x")])),
        );
        assert_eq!(leaf.to_html().unwrap(), r#"<img src="i.png" alt="x"></img>"#);
    }

    #[test]
    fn test_leaf_does_not_escape() {
        let leaf = LeafNode::tagged("code", "<b> & </b>");
        assert_eq!(leaf.to_html().unwrap(), "<code><b> & </b></code>");
    }

    #[test]
    fn test_leaf_missing_value() {
        init_logging();
        let leaf = LeafNode::new(Some("a".to_string()), None, None);
        assert_eq!(
            leaf.to_html(),
            Err(Error::MissingValue {
                tag: Some("a".to_string())
            })
        );
    }

    #[test]
    fn test_parent_with_attributes() {
        let parent = ParentNode::new(
            Some("a".to_string()),
            Some(vec![LeafNode::tagged("b", "x").into()]),
            Some(attrs(&[("href", "u")])),
        );
        assert_eq!(parent.to_html().unwrap(), r#"<a href="u"><b>x</b></a>"#);
    }

    #[test]
    fn test_parent_preserves_child_order() {
        let parent = ParentNode::tagged(
            "div",
            vec![LeafNode::tagged("b", "x").into(), LeafNode::tagged("i", "y").into()],
        );
        assert_eq!(parent.to_html().unwrap(), "<div><b>x</b><i>y</i></div>");
    }

    #[test]
    fn test_parent_mixed_children() {
        let parent = ParentNode::tagged(
            "p",
            vec![
                LeafNode::tagged("b", "Bold text").into(),
                LeafNode::text("Normal text").into(),
                LeafNode::tagged("i", "italic text").into(),
                LeafNode::text("Normal text").into(),
            ],
        );
        assert_eq!(
            parent.to_html().unwrap(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_nested_parents() {
        let inner = ParentNode::tagged("li", vec![LeafNode::tagged("code", "x").into()]);
        let outer = ParentNode::tagged("ul", vec![inner.clone().into(), inner.into()]);
        assert_eq!(
            render(&outer.into()).unwrap(),
            "<ul><li><code>x</code></li><li><code>x</code></li></ul>"
        );
    }

    #[test]
    fn test_parent_without_tag_renders_fragment() {
        let parent = ParentNode::new(
            None,
            Some(vec![LeafNode::text("a").into(), LeafNode::tagged("b", "c").into()]),
            None,
        );
        assert_eq!(parent.to_html().unwrap(), "a<b>c</b>");
    }

    #[test]
    fn test_parent_missing_children() {
        let parent = ParentNode::new(Some("div".to_string()), None, None);
        assert_eq!(
            parent.to_html(),
            Err(Error::MissingChildren {
                tag: Some("div".to_string())
            })
        );
    }

    #[test]
    fn test_parent_empty_children() {
        let parent = ParentNode::tagged("div", vec![]);
        assert!(matches!(
            parent.to_html(),
            Err(Error::MissingChildren { .. })
        ));
    }

    #[test]
    fn test_nested_failure_propagates() {
        init_logging();
        let parent = ParentNode::tagged("div", vec![ParentNode::tagged("span", vec![]).into()]);
        assert_eq!(
            parent.to_html(),
            Err(Error::MissingChildren {
                tag: Some("span".to_string())
            })
        );
    }

    #[test]
    fn test_first_invalid_node_wins() {
        let parent = ParentNode::tagged(
            "div",
            vec![
                LeafNode::tagged("b", "ok").into(),
                LeafNode::new(Some("i".to_string()), None, None).into(),
                ParentNode::tagged("p", vec![]).into(),
            ],
        );
        assert_eq!(
            parent.to_html(),
            Err(Error::MissingValue {
                tag: Some("i".to_string())
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LeafNode::new(Some("a".to_string()), None, None)
            .to_html()
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid node: leaf node <a> has no value");

        let err = ParentNode::new(None, None, None).to_html().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid node: parent node without tag has no children"
        );
    }

    #[test]
    fn test_rendered_markup_parses() {
        let parent = ParentNode::tagged(
            "div",
            vec![
                ParentNode::new(
                    Some("a".to_string()),
                    Some(vec![LeafNode::tagged("b", "x").into()]),
                    Some(attrs(&[("target", "_blank"), ("href", "https://example.com")])),
                )
                .into(),
                LeafNode::tagged("i", "y").into(),
            ],
        );
        let html = parent.to_html().unwrap();

        let fragment = scraper::Html::parse_fragment(&html);
        let link = scraper::Selector::parse("div > a > b").unwrap();
        let italic = scraper::Selector::parse("div > i").unwrap();

        let b = fragment.select(&link).next().unwrap();
        assert_eq!(b.text().collect::<String>(), "x");
        let a = fragment
            .select(&scraper::Selector::parse("a").unwrap())
            .next()
            .unwrap();
        assert_eq!(a.value().attr("href"), Some("https://example.com"));
        assert_eq!(a.value().attr("target"), Some("_blank"));
        assert_eq!(fragment.select(&italic).count(), 1);
    }
}
