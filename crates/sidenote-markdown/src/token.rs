//! Intermediate token representation.
//!
//! The tokenizer turns every line (or matched span of a line) into a [`Token`].
//! The renderer consumes tokens once and never mutates them.

/// Token type tags emitted by the built-in plugins.
pub mod kinds {
    /// Unmatched text.
    pub const TEXT: &str = "text";
    /// `# heading` (levels 1-3).
    pub const HEADING: &str = "heading";
    /// `**bold**`
    pub const BOLD: &str = "bold";
    /// `*italic*`
    pub const ITALIC: &str = "italic";
    /// `` `code` ``
    pub const INLINE_CODE: &str = "inlineCode";
    /// Fenced code block.
    pub const CODE_BLOCK: &str = "codeBlock";
    /// `[label](url)`
    pub const LINK: &str = "link";
    /// `1. item`
    pub const ORDERED_LIST: &str = "orderedList";
    /// `- item` or `* item`
    pub const UNORDERED_LIST: &str = "unorderedList";
    /// `> quote`
    pub const BLOCKQUOTE: &str = "blockquote";
    /// `---`
    pub const HR: &str = "hr";
}

/// A unit produced by parsing one line or one matched span.
///
/// `kind` is a free-form tag so third-party plugins can introduce their own
/// token types. Variant-specific data lives in the optional fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Token type tag, matched against plugin claims at render time.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Semantic payload (captured text).
    pub content: String,
    /// Heading level (1-3).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub level: Option<u8>,
    /// Code block language tag (may be empty).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lang: Option<String>,
    /// Link target.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub url: Option<String>,
    /// List bullet glyph or ordinal numeral.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub marker: Option<String>,
}

impl Token {
    /// Create a token with the given type tag and content.
    #[must_use]
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
            level: None,
            lang: None,
            url: None,
            marker: None,
        }
    }

    /// Create a plain `text` token.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(kinds::TEXT, content)
    }

    /// Set the heading level.
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the code block language.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the link target.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the list marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Check the token type tag.
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }
}
