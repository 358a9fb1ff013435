//! inkpress-core - HTML node tree and serialization
//!
//! This crate provides the markup node model that inline content is lowered
//! into, and the rendering of that model to an HTML string. It is used by
//! `inkpress` (for styled text spans) and by whatever groups those spans
//! into block-level elements.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────┐
//! LeafNode   ────▶ │          │
//!                  │   Node   │ ──to_html──▶ HTML String
//! ParentNode ────▶ │          │
//!                  └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use inkpress_core::{Attributes, LeafNode, ParentNode, ToHtml};
//!
//! let mut attributes = Attributes::new();
//! attributes.insert("href".to_string(), "https://example.com".to_string());
//!
//! let link = ParentNode::new(
//!     Some("a".to_string()),
//!     Some(vec![LeafNode::tagged("b", "Example").into()]),
//!     Some(attributes),
//! );
//!
//! let html = link.to_html().unwrap();
//! assert_eq!(html, r#"<a href="https://example.com"><b>Example</b></a>"#);
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode, LeafNode, Node, ParentNode};
pub use render::{attributes_to_markup, render, ToHtml};

/// Error type for node rendering and lowering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid node: leaf node {} has no value", display_tag(.tag))]
    MissingValue { tag: Option<String> },

    #[error("Invalid node: parent node {} has no children", display_tag(.tag))]
    MissingChildren { tag: Option<String> },

    #[error("Invalid node: unknown text type {0:?}")]
    UnknownTextType(String),

    #[error("Invalid node: {text_type} text node has no url")]
    MissingUrl { text_type: String },
}

fn display_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("<{}>", tag),
        None => "without tag".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
