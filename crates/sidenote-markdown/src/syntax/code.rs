//! Code: `` `inline` `` spans and fenced code blocks.

use std::sync::LazyLock;

use crate::plugin::{LineContext, Pattern, PluginKind, SyntaxMatch, SyntaxPlugin};
use crate::render::RenderContext;
use crate::token::{Token, kinds};

static INLINE_CODE: LazyLock<Vec<Pattern>> =
    LazyLock::new(|| vec![Pattern::parse(r"`([^`\n]+?)`").unwrap()]);

/// `` `code` ``
#[derive(Debug, Default)]
pub struct InlineCodePlugin;

impl SyntaxPlugin for InlineCodePlugin {
    fn name(&self) -> &'static str {
        "inlineCode"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Inline
    }

    fn priority(&self) -> i32 {
        40
    }

    fn patterns(&self) -> &[Pattern] {
        &INLINE_CODE
    }

    fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        Some(Token::new(kinds::INLINE_CODE, m.group(1)?))
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        Some(ctx.element(
            "code",
            &[("class", "md-inline-code")],
            &ctx.escape(&token.content),
        ))
    }
}

/// Renderer for fenced code blocks.
///
/// Fences span several lines, so the tokenizer recognizes them itself and
/// emits `codeBlock` tokens; this plugin has no line patterns.
#[derive(Debug, Default)]
pub struct CodeBlockPlugin;

impl SyntaxPlugin for CodeBlockPlugin {
    fn name(&self) -> &'static str {
        "codeBlock"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Block
    }

    fn priority(&self) -> i32 {
        90
    }

    fn create_token(&self, _m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        None
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        let escaped = ctx.escape(&token.content);
        let code = match token.lang.as_deref() {
            Some(lang) if !lang.is_empty() => {
                let class = format!("language-{lang}");
                ctx.element("code", &[("class", class.as_str())], &escaped)
            }
            _ => ctx.element("code", &[], &escaped),
        };
        Some(ctx.element("pre", &[("class", "md-code-block")], &code))
    }
}
