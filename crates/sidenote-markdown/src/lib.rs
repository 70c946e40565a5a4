//! Plugin-based markdown engine for short notes.
//!
//! Markdown is tokenized line by line and rendered to HTML by a set of
//! [`SyntaxPlugin`]s registered into a [`MarkdownEngine`]. Every supported
//! construct (headings, lists, emphasis, links, code) is a plugin, so new
//! syntax can be added without touching the engine.
//!
//! # Architecture
//!
//! - **Tokenizing**: outside fenced code blocks, block plugins try to claim
//!   the whole line; otherwise inline plugins split it into spans. Unmatched
//!   text becomes `text` tokens.
//! - **Rendering**: each token goes to the highest-priority plugin that
//!   claims its type. Unclaimed tokens render as escaped text.
//!
//! All text content is HTML-escaped; plugins build markup through
//! [`RenderContext`].
//!
//! # Example
//!
//! ```
//! use sidenote_markdown::MarkdownEngine;
//!
//! let engine = MarkdownEngine::with_default_plugins();
//! let html = engine.process("Some **bold** text");
//!
//! assert_eq!(
//!     html,
//!     concat!(
//!         "Some ",
//!         r#"<span class="md-bold"><span class="md-delimiter">**</span>bold"#,
//!         r#"<span class="md-delimiter">**</span></span>"#,
//!         " text",
//!     )
//! );
//! ```
//!
//! The module-level [`render`], [`parse`] and text helpers use a shared
//! [`default_engine`] with every built-in plugin.

mod engine;
mod error;
mod fence;
mod plugin;
mod render;
pub mod syntax;
mod text;
mod token;
mod tokenizer;

use std::sync::LazyLock;

pub use engine::MarkdownEngine;
pub use error::PluginError;
pub use plugin::{LineContext, Pattern, PatternMatches, PluginKind, SyntaxMatch, SyntaxPlugin};
pub use render::{RenderContext, RenderInput, escape_html};
pub use text::{DEFAULT_PREVIEW_LENGTH, has_markdown, preview, strip_markdown};
pub use token::{Token, kinds};

static DEFAULT_ENGINE: LazyLock<MarkdownEngine> =
    LazyLock::new(MarkdownEngine::with_default_plugins);

/// Shared engine with every built-in plugin registered.
///
/// Built on first use. Create a [`MarkdownEngine`] directly for custom
/// plugin sets.
pub fn default_engine() -> &'static MarkdownEngine {
    &DEFAULT_ENGINE
}

/// Render markdown text to HTML with the [`default_engine`].
///
/// ```
/// assert_eq!(
///     sidenote_markdown::render("---"),
///     r#"<hr class="md-hr">"#
/// );
/// ```
#[must_use]
pub fn render(text: &str) -> String {
    default_engine().process(text)
}

/// Tokenize markdown text with the [`default_engine`].
#[must_use]
pub fn parse(text: &str) -> Vec<Token> {
    default_engine().parse(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_engine_is_shared() {
        assert!(std::ptr::eq(default_engine(), default_engine()));
        assert_eq!(default_engine().len(), syntax::BUILTIN_NAMES.len());
    }

    #[test]
    fn test_module_helpers() {
        assert_eq!(parse("plain"), vec![Token::text("plain")]);
        assert_eq!(render("a & b"), "a &amp; b");
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_default_engine_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || render(&format!("# Note {i}"))))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let html = handle.join().unwrap();
            assert!(html.contains(&format!("Note {i}")), "html: {html}");
        }
    }
}
