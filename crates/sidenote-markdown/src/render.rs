//! Token-to-HTML rendering.
//!
//! Each token is rendered independently by the first plugin that claims its
//! type; unclaimed tokens fall back to escaped plain text, so content is never
//! dropped. Outputs are concatenated without separators.

use std::fmt::Write;

use crate::plugin::SyntaxPlugin;
use crate::token::Token;

/// Escape HTML special characters.
///
/// # Example
///
/// ```
/// use sidenote_markdown::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// URL schemes never emitted into `href` attributes.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Helpers handed to [`SyntaxPlugin::render`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderContext {
    _private: (),
}

impl RenderContext {
    /// Create a render context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape text for inclusion in HTML.
    pub fn escape(&self, text: &str) -> String {
        escape_html(text)
    }

    /// Build an element: attribute values are escaped, `inner_html` is trusted.
    ///
    /// # Example
    ///
    /// ```
    /// use sidenote_markdown::RenderContext;
    ///
    /// let ctx = RenderContext::new();
    /// let html = ctx.element("span", &[("class", "md-bold")], "hi");
    /// assert_eq!(html, r#"<span class="md-bold">hi</span>"#);
    /// ```
    pub fn element(&self, tag: &str, attrs: &[(&str, &str)], inner_html: &str) -> String {
        let mut out = String::with_capacity(tag.len() * 2 + inner_html.len() + 16);
        out.push('<');
        out.push_str(tag);
        for (name, value) in attrs {
            write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
        }
        out.push('>');
        out.push_str(inner_html);
        write!(out, "</{tag}>").unwrap();
        out
    }

    /// Make a link target safe for an `href` attribute.
    ///
    /// Script-capable schemes are replaced with `#`; everything else is
    /// returned escaped.
    pub fn href(&self, url: &str) -> String {
        let trimmed = url.trim_start().to_ascii_lowercase();
        if BLOCKED_SCHEMES.iter().any(|s| trimmed.starts_with(s)) {
            return "#".to_owned();
        }
        escape_html(url)
    }
}

/// Input accepted by [`MarkdownEngine::render`](crate::MarkdownEngine::render):
/// either a token sequence or raw text that is parsed first.
#[derive(Clone, Copy, Debug)]
pub enum RenderInput<'a> {
    /// Already tokenized input.
    Tokens(&'a [Token]),
    /// Raw markdown.
    Text(&'a str),
}

impl<'a> From<&'a [Token]> for RenderInput<'a> {
    fn from(tokens: &'a [Token]) -> Self {
        Self::Tokens(tokens)
    }
}

impl<'a> From<&'a Vec<Token>> for RenderInput<'a> {
    fn from(tokens: &'a Vec<Token>) -> Self {
        Self::Tokens(tokens)
    }
}

impl<'a, const N: usize> From<&'a [Token; N]> for RenderInput<'a> {
    fn from(tokens: &'a [Token; N]) -> Self {
        Self::Tokens(tokens)
    }
}

impl<'a> From<&'a str> for RenderInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for RenderInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

/// Render tokens with plugins given in priority order.
pub(crate) fn render_tokens<'p>(
    plugins: impl Iterator<Item = &'p dyn SyntaxPlugin> + Clone,
    tokens: &[Token],
) -> String {
    let ctx = RenderContext::new();
    let mut output = String::with_capacity(tokens.len() * 32);
    for token in tokens {
        output.push_str(&render_token(plugins.clone(), token, &ctx));
    }
    output
}

fn render_token<'p>(
    mut plugins: impl Iterator<Item = &'p dyn SyntaxPlugin>,
    token: &Token,
    ctx: &RenderContext,
) -> String {
    plugins
        .find_map(|plugin| {
            if plugin.claims(&token.kind) {
                plugin.render(token, ctx)
            } else {
                None
            }
        })
        .unwrap_or_else(|| escape_html(&token.content))
}
