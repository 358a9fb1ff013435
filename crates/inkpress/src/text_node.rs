//! Styled inline text spans.
//!
//! A [`TextNode`] is what an upstream inline parser produces for each run of
//! text: the raw text, its [`TextType`] and, for links and images, a url.

use std::fmt;
use std::str::FromStr;

use inkpress_core::Error;

/// The semantic style of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Unstyled text
    Plain,
    Bold,
    Italic,
    /// Inline code
    Code,
    /// Hyperlink; needs a url
    Link,
    /// Image; needs a url, the text becomes the alt text
    Image,
}

impl TextType {
    /// All text types, in declaration order
    pub const ALL: [TextType; 6] = [
        TextType::Plain,
        TextType::Bold,
        TextType::Italic,
        TextType::Code,
        TextType::Link,
        TextType::Image,
    ];

    /// Canonical name of this text type
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Plain => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }

    /// Whether spans of this type carry a url
    pub fn needs_url(&self) -> bool {
        matches!(self, TextType::Link | TextType::Image)
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "plain" => Ok(TextType::Plain),
            "bold" => Ok(TextType::Bold),
            "italic" => Ok(TextType::Italic),
            "code" => Ok(TextType::Code),
            "link" => Ok(TextType::Link),
            "image" => Ok(TextType::Image),
            other => Err(Error::UnknownTextType(other.to_string())),
        }
    }
}

/// One inline span of content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    pub url: Option<String>,
}

impl TextNode {
    /// Create a span without a url
    pub fn new(text: &str, text_type: TextType) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: None,
        }
    }

    /// Create a span with a url (links and images)
    pub fn with_url(text: &str, text_type: TextType, url: &str) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: Some(url.to_string()),
        }
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextNode({}, {}, {})",
            self.text,
            self.text_type,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
