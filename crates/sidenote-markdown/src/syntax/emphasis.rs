//! Emphasis: `**bold**` and `*italic*`.
//!
//! Nested emphasis is not supported. `***x***` matches neither plugin.

use std::sync::LazyLock;

use crate::plugin::{LineContext, Pattern, PluginKind, SyntaxMatch, SyntaxPlugin};
use crate::render::RenderContext;
use crate::token::{Token, kinds};

static BOLD: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::parse(r"\*\*([^*]+?)\*\*")
            .unwrap()
            .not_followed_by('*'),
    ]
});

static ITALIC: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::parse(r"\*([^*]+?)\*")
            .unwrap()
            .not_preceded_by('*')
            .not_followed_by('*'),
    ]
});

/// Wrap escaped content in visible delimiter spans.
fn delimited(ctx: &RenderContext, class: &str, delimiter: &str, content: &str) -> String {
    let marker = ctx.element("span", &[("class", "md-delimiter")], delimiter);
    let inner = format!("{marker}{}{marker}", ctx.escape(content));
    ctx.element("span", &[("class", class)], &inner)
}

/// `**bold**`
#[derive(Debug, Default)]
pub struct BoldPlugin;

impl SyntaxPlugin for BoldPlugin {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Inline
    }

    fn priority(&self) -> i32 {
        30
    }

    fn patterns(&self) -> &[Pattern] {
        &BOLD
    }

    fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        Some(Token::new(kinds::BOLD, m.group(1)?))
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        Some(delimited(ctx, "md-bold", "**", &token.content))
    }
}

/// `*italic*`, never the inner part of `**bold**`.
#[derive(Debug, Default)]
pub struct ItalicPlugin;

impl SyntaxPlugin for ItalicPlugin {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Inline
    }

    fn priority(&self) -> i32 {
        20
    }

    fn patterns(&self) -> &[Pattern] {
        &ITALIC
    }

    fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        Some(Token::new(kinds::ITALIC, m.group(1)?))
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        Some(delimited(ctx, "md-italic", "*", &token.content))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MarkdownEngine;

    fn engine() -> MarkdownEngine {
        let mut engine = MarkdownEngine::new();
        engine.register(BoldPlugin).unwrap();
        engine.register(ItalicPlugin).unwrap();
        engine
    }

    #[test]
    fn test_bold_and_italic_on_one_line() {
        assert_eq!(
            engine().parse("**bold** and *italic*"),
            vec![
                Token::new(kinds::BOLD, "bold"),
                Token::text(" and "),
                Token::new(kinds::ITALIC, "italic"),
            ]
        );
    }

    #[test]
    fn test_italic_before_bold_keeps_source_order() {
        assert_eq!(
            engine().parse("*a* **b**"),
            vec![
                Token::new(kinds::ITALIC, "a"),
                Token::text(" "),
                Token::new(kinds::BOLD, "b"),
            ]
        );
    }

    #[test]
    fn test_triple_stars_not_emphasis() {
        assert_eq!(engine().parse("***x***"), vec![Token::text("***x***")]);
    }

    #[test]
    fn test_single_star_is_text() {
        assert_eq!(engine().parse("50% * 2"), vec![Token::text("50% * 2")]);
    }

    #[test]
    fn test_pathological_input_terminates() {
        let input = "*".repeat(5000) + "a";
        let tokens = engine().parse(&input);
        assert_eq!(tokens, vec![Token::text(input.clone())]);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            engine().process("**<b>**"),
            concat!(
                r#"<span class="md-bold"><span class="md-delimiter">**</span>"#,
                r#"&lt;b&gt;<span class="md-delimiter">**</span></span>"#
            )
        );
        assert_eq!(
            engine().process("*x*"),
            concat!(
                r#"<span class="md-italic"><span class="md-delimiter">*</span>"#,
                r#"x<span class="md-delimiter">*</span></span>"#
            )
        );
    }
}
