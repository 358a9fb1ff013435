//! Configuration options for lowering text nodes

/// Tag names used when lowering each text type.
///
/// The defaults are the conventional HTML elements: `b`, `i`, `code`, `a`
/// and `img`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tag for bold spans
    pub bold_tag: String,

    /// Tag for italic spans
    pub italic_tag: String,

    /// Tag for inline code spans
    pub code_tag: String,

    /// Tag for links (gets an `href` attribute)
    pub link_tag: String,

    /// Tag for images (gets `src` and `alt` attributes)
    pub image_tag: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bold_tag: "b".to_string(),
            italic_tag: "i".to_string(),
            code_tag: "code".to_string(),
            link_tag: "a".to_string(),
            image_tag: "img".to_string(),
        }
    }
}
