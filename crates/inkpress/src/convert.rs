//! Lower text nodes into HTML leaf nodes

use inkpress_core::{Attributes, Error, LeafNode, Node, Result};
use log::{debug, trace};

use crate::options::Options;
use crate::text_node::{TextNode, TextType};

/// Lower a text node into a leaf node using the default tag names
pub fn text_node_to_html_node(text_node: &TextNode) -> Result<LeafNode> {
    text_node_to_html_node_with(text_node, &Options::default())
}

/// Lower a text node into a leaf node.
///
/// Links and images must carry a url; one without fails with
/// [`Error::MissingUrl`] here rather than producing an attribute with no
/// value.
pub fn text_node_to_html_node_with(text_node: &TextNode, options: &Options) -> Result<LeafNode> {
    let text = text_node.text.as_str();

    let leaf = match text_node.text_type {
        TextType::Plain => LeafNode::text(text),
        TextType::Bold => LeafNode::tagged(&options.bold_tag, text),
        TextType::Italic => LeafNode::tagged(&options.italic_tag, text),
        TextType::Code => LeafNode::tagged(&options.code_tag, text),
        TextType::Link => {
            let mut attributes = Attributes::new();
            attributes.insert("href".to_string(), require_url(text_node)?.to_string());
            LeafNode::new(
                Some(options.link_tag.clone()),
                Some(text.to_string()),
                Some(attributes),
            )
        }
        TextType::Image => {
            let mut attributes = Attributes::new();
            attributes.insert("src".to_string(), require_url(text_node)?.to_string());
            attributes.insert("alt".to_string(), text.to_string());
            LeafNode::new(
                Some(options.image_tag.clone()),
                Some(String::new()),
                Some(attributes),
            )
        }
    };

    trace!("lowered {} span to {:?}", text_node.text_type, leaf.tag);
    Ok(leaf)
}

/// Lower a run of text nodes, in order, ready to be placed under a parent
pub fn text_nodes_to_html_nodes(text_nodes: &[TextNode]) -> Result<Vec<Node>> {
    let options = Options::default();
    text_nodes
        .iter()
        .map(|n| text_node_to_html_node_with(n, &options).map(Node::from))
        .collect()
}

fn require_url(text_node: &TextNode) -> Result<&str> {
    text_node.url.as_deref().ok_or_else(|| {
        debug!("rejecting {} without url: {}", text_node.text_type, text_node);
        Error::MissingUrl {
            text_type: text_node.text_type.to_string(),
        }
    })
}
