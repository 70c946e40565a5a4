//! Blockquotes (`> text`) and horizontal rules (`---`, `***`).

use std::sync::LazyLock;

use crate::plugin::{LineContext, Pattern, PluginKind, SyntaxMatch, SyntaxPlugin};
use crate::render::RenderContext;
use crate::token::{Token, kinds};

static BLOCKQUOTE: LazyLock<Vec<Pattern>> =
    LazyLock::new(|| vec![Pattern::parse(r"^>\s*(.+)$").unwrap()]);

static RULE: LazyLock<Vec<Pattern>> =
    LazyLock::new(|| vec![Pattern::parse(r"^[-*]{3,}$").unwrap()]);

/// `> quoted line`
#[derive(Debug, Default)]
pub struct BlockquotePlugin;

impl SyntaxPlugin for BlockquotePlugin {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Block
    }

    fn priority(&self) -> i32 {
        80
    }

    fn patterns(&self) -> &[Pattern] {
        &BLOCKQUOTE
    }

    fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        Some(Token::new(kinds::BLOCKQUOTE, m.group(1)?))
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        let marker = ctx.element("span", &[("class", "md-delimiter")], "&gt; ");
        let inner = marker + &ctx.escape(&token.content);
        Some(ctx.element("div", &[("class", "md-blockquote")], &inner))
    }
}

/// `---` or `***` on a line of its own.
#[derive(Debug, Default)]
pub struct HorizontalRulePlugin;

impl SyntaxPlugin for HorizontalRulePlugin {
    fn name(&self) -> &'static str {
        "hr"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Block
    }

    fn priority(&self) -> i32 {
        60
    }

    fn patterns(&self) -> &[Pattern] {
        &RULE
    }

    fn create_token(&self, _m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        Some(Token::new(kinds::HR, ""))
    }

    fn render(&self, _token: &Token, _ctx: &RenderContext) -> Option<String> {
        Some(r#"<hr class="md-hr">"#.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MarkdownEngine;
    use crate::syntax::ListPlugin;

    fn engine() -> MarkdownEngine {
        let mut engine = MarkdownEngine::new();
        engine.register(BlockquotePlugin).unwrap();
        engine.register(HorizontalRulePlugin).unwrap();
        engine.register(ListPlugin).unwrap();
        engine
    }

    #[test]
    fn test_blockquote() {
        let engine = engine();
        assert_eq!(
            engine.parse("> quoted"),
            vec![Token::new(kinds::BLOCKQUOTE, "quoted")]
        );
        assert_eq!(
            engine.parse(">tight"),
            vec![Token::new(kinds::BLOCKQUOTE, "tight")]
        );
        assert_eq!(engine.parse(">"), vec![Token::text(">")]);
    }

    #[test]
    fn test_rules() {
        let engine = engine();
        for input in ["---", "***", "-----", "*-*"] {
            assert_eq!(engine.parse(input), vec![Token::new(kinds::HR, "")], "input: {input}");
        }
    }

    #[test]
    fn test_rule_not_list() {
        assert_eq!(engine().parse("--- x"), vec![Token::text("--- x")]);
    }

    #[test]
    fn test_render() {
        let engine = engine();
        assert_eq!(
            engine.process("> a<b"),
            r#"<div class="md-blockquote"><span class="md-delimiter">&gt; </span>a&lt;b</div>"#
        );
        assert_eq!(engine.process("---"), r#"<hr class="md-hr">"#);
    }
}
