//! List items: `- item`, `* item`, `1. item`.

use std::sync::LazyLock;

use crate::plugin::{LineContext, Pattern, PluginKind, SyntaxMatch, SyntaxPlugin};
use crate::render::RenderContext;
use crate::token::{Token, kinds};

/// Bullet glyph used as the marker of unordered items.
pub const BULLET: &str = "•";

/// Pattern order: unordered (index 0), ordered (index 1).
static PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::parse(r"^[-*]\s+(.+)$").unwrap(),
        Pattern::parse(r"^(\d+)\.\s+(.+)$").unwrap(),
    ]
});

/// Ordered and unordered list items, one token per line.
#[derive(Debug, Default)]
pub struct ListPlugin;

impl SyntaxPlugin for ListPlugin {
    fn name(&self) -> &'static str {
        "list"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Block
    }

    fn priority(&self) -> i32 {
        70
    }

    fn patterns(&self) -> &[Pattern] {
        &PATTERNS
    }

    fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        match m.pattern_index() {
            0 => Some(Token::new(kinds::UNORDERED_LIST, m.group(1)?).with_marker(BULLET)),
            1 => Some(Token::new(kinds::ORDERED_LIST, m.group(2)?).with_marker(m.group(1)?)),
            _ => None,
        }
    }

    fn claims(&self, kind: &str) -> bool {
        kind == kinds::ORDERED_LIST || kind == kinds::UNORDERED_LIST
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        let content = ctx.escape(&token.content);
        if token.is(kinds::ORDERED_LIST) {
            let number = format!("{}.", ctx.escape(token.marker.as_deref()?));
            let marker = ctx.element("span", &[("class", "md-ordered-num md-delimiter")], &number);
            Some(ctx.element("div", &[("class", "md-ordered-item")], &(marker + &content)))
        } else {
            let bullet = ctx.escape(token.marker.as_deref().unwrap_or(BULLET));
            let marker = ctx.element("span", &[("class", "md-delimiter")], &bullet);
            Some(ctx.element("div", &[("class", "md-list-item")], &(marker + &content)))
        }
    }
}
