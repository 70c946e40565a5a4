//! Syntax plugin contract.
//!
//! Every supported construct (headings, bold, links, ...) is a [`SyntaxPlugin`]
//! registered into a [`MarkdownEngine`](crate::MarkdownEngine). The engine
//! consults plugins twice:
//!
//! 1. **Tokenizing**: [`patterns`](SyntaxPlugin::patterns) are matched against
//!    each line and [`create_token`](SyntaxPlugin::create_token) turns a match
//!    into a [`Token`].
//! 2. **Rendering**: a token is handed to the first plugin that
//!    [`claims`](SyntaxPlugin::claims) its type.
//!
//! # Plugin Kinds
//!
//! - [`PluginKind::Block`]: claims a whole line (headings, lists, quotes, rules)
//! - [`PluginKind::Inline`]: claims spans within a line (bold, italic, code, links)
//!
//! # Example
//!
//! ```
//! use sidenote_markdown::{
//!     LineContext, MarkdownEngine, Pattern, PluginKind, RenderContext, SyntaxMatch,
//!     SyntaxPlugin, Token,
//! };
//!
//! struct Highlight {
//!     patterns: Vec<Pattern>,
//! }
//!
//! impl SyntaxPlugin for Highlight {
//!     fn name(&self) -> &str { "highlight" }
//!     fn kind(&self) -> PluginKind { PluginKind::Inline }
//!     fn priority(&self) -> i32 { 25 }
//!     fn patterns(&self) -> &[Pattern] { &self.patterns }
//!
//!     fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
//!         Some(Token::new("highlight", m.group(1)?))
//!     }
//!
//!     fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
//!         Some(ctx.element("mark", &[], &ctx.escape(&token.content)))
//!     }
//! }
//!
//! let mut engine = MarkdownEngine::new();
//! engine
//!     .register(Highlight { patterns: vec![Pattern::parse(r"==([^=]+)==").unwrap()] })
//!     .unwrap();
//!
//! assert_eq!(engine.process("a ==b== c"), "a <mark>b</mark> c");
//! ```

mod pattern;

use regex::Captures;

use crate::render::RenderContext;
use crate::token::Token;

pub use pattern::{Pattern, PatternMatches};
pub(crate) use pattern::next_boundary;

/// Which tokenizing pass consults a plugin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PluginKind {
    /// Matches whole lines; a match suppresses inline parsing for that line.
    Block,
    /// Matches spans within a line.
    Inline,
}

/// Source location handed to [`SyntaxPlugin::create_token`].
#[derive(Clone, Copy, Debug)]
pub struct LineContext<'a> {
    /// The full line being tokenized (without its line terminator).
    pub line: &'a str,
    /// Zero-based line number within the input.
    pub line_index: usize,
}

/// A successful pattern match offered to a token factory.
pub struct SyntaxMatch<'h> {
    captures: Captures<'h>,
    pattern_index: usize,
}

impl<'h> SyntaxMatch<'h> {
    /// Wrap captures produced by the pattern at `pattern_index`.
    pub fn new(captures: Captures<'h>, pattern_index: usize) -> Self {
        Self {
            captures,
            pattern_index,
        }
    }

    /// Index of the matching pattern in [`SyntaxPlugin::patterns`].
    pub fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    /// The whole matched text.
    pub fn as_str(&self) -> &'h str {
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    /// Text of capture group `index`, if it participated in the match.
    pub fn group(&self, index: usize) -> Option<&'h str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// Byte offset of the match start within the line.
    pub fn start(&self) -> usize {
        self.captures.get(0).map_or(0, |m| m.start())
    }

    /// Byte offset of the match end within the line.
    pub fn end(&self) -> usize {
        self.captures.get(0).map_or(0, |m| m.end())
    }
}

/// A syntax extension: metadata, match rules, token factory and renderer.
///
/// Implementations must be pure: the same match always yields the same token
/// and the same token always renders to the same HTML.
///
/// # Thread Safety
///
/// Plugins are `Send + Sync` so one engine can be shared across threads for
/// read-only `parse`/`render` calls.
pub trait SyntaxPlugin: Send + Sync {
    /// Unique plugin name (e.g., "heading", "bold").
    ///
    /// Registration rejects empty names and names already in use.
    fn name(&self) -> &str;

    /// Which parsing pass consults this plugin.
    fn kind(&self) -> PluginKind;

    /// Match order within the plugin's kind; higher tries first.
    fn priority(&self) -> i32 {
        0
    }

    /// Ordered match rules.
    ///
    /// Block plugins are tried pattern by pattern against the whole line;
    /// inline plugins have every pattern matched globally across the line.
    fn patterns(&self) -> &[Pattern] {
        &[]
    }

    /// Build a token from a successful match.
    ///
    /// Returning `None` lets block matching continue with the next pattern.
    /// For inline plugins the matched span is kept as plain text.
    fn create_token(&self, m: &SyntaxMatch<'_>, ctx: &LineContext<'_>) -> Option<Token>;

    /// Whether this plugin renders tokens of type `kind`.
    ///
    /// Defaults to tokens whose type equals the plugin name.
    fn claims(&self, kind: &str) -> bool {
        kind == self.name()
    }

    /// Render a claimed token to HTML.
    ///
    /// Returns `None` to let the next claiming plugin (or the default
    /// escaped-text fallback) handle it.
    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shout;

    impl SyntaxPlugin for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn kind(&self) -> PluginKind {
            PluginKind::Inline
        }

        fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
            Some(Token::new("shout", m.as_str()))
        }

        fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
            Some(ctx.escape(&token.content.to_uppercase()))
        }
    }

    #[test]
    fn test_defaults() {
        let shout = Shout;
        assert_eq!(shout.priority(), 0);
        assert!(shout.patterns().is_empty());
        assert!(shout.claims("shout"));
        assert!(!shout.claims("text"));
    }

    #[test]
    fn test_syntax_match_accessors() {
        let pattern = Pattern::parse(r"\[([^\]]+)\]").unwrap();
        let caps = pattern.captures("see [docs] now").unwrap();
        let m = SyntaxMatch::new(caps, 2);

        assert_eq!(m.pattern_index(), 2);
        assert_eq!(m.as_str(), "[docs]");
        assert_eq!(m.group(1), Some("docs"));
        assert_eq!(m.group(2), None);
        assert_eq!((m.start(), m.end()), (4, 10));
    }

    #[test]
    fn test_render_through_trait_object() {
        let plugin: Box<dyn SyntaxPlugin> = Box::new(Shout);
        let html = plugin.render(&Token::new("shout", "<hi>"), &RenderContext::new());
        assert_eq!(html.as_deref(), Some("&lt;HI&gt;"));
    }
}
