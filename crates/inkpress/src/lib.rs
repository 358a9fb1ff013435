//! # inkpress
//!
//! Lower styled inline text into HTML nodes.
//!
//! An upstream parser splits document text into [`TextNode`] spans. Each span
//! is lowered into a [`LeafNode`], the leaves are grouped under
//! [`ParentNode`]s by the caller, and the root is rendered with
//! [`ToHtml::to_html`].
//!
//! ## Example
//!
//! ```rust
//! use inkpress::{text_nodes_to_html_nodes, ParentNode, TextNode, TextType, ToHtml};
//!
//! let spans = vec![
//!     TextNode::new("Hello ", TextType::Plain),
//!     TextNode::new("World", TextType::Bold),
//! ];
//!
//! let paragraph = ParentNode::tagged("p", text_nodes_to_html_nodes(&spans).unwrap());
//! assert_eq!(paragraph.to_html().unwrap(), "<p>Hello <b>World</b></p>");
//! ```
//!
//! ## Example (single span)
//!
//! ```rust
//! use inkpress::{text_node_to_html_node, TextNode, TextType, ToHtml};
//!
//! let link = TextNode::with_url("docs", TextType::Link, "https://example.com");
//! let leaf = text_node_to_html_node(&link).unwrap();
//! assert_eq!(leaf.to_html().unwrap(), r#"<a href="https://example.com">docs</a>"#);
//! ```

mod convert;
mod options;
mod text_node;

pub use convert::{text_node_to_html_node, text_node_to_html_node_with, text_nodes_to_html_nodes};
pub use options::Options;
pub use text_node::{TextNode, TextType};

pub use inkpress_core::{
    attributes_to_markup, render, Attributes, Error, HtmlNode, LeafNode, Node, ParentNode, Result,
    ToHtml,
};
