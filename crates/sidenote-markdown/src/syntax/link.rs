//! Links: `[label](url)`.

use std::sync::LazyLock;

use crate::plugin::{LineContext, Pattern, PluginKind, SyntaxMatch, SyntaxPlugin};
use crate::render::RenderContext;
use crate::token::{Token, kinds};

static PATTERNS: LazyLock<Vec<Pattern>> =
    LazyLock::new(|| vec![Pattern::parse(r"\[([^\]]+?)\]\(([^)]+?)\)").unwrap()]);

/// Inline links. The target is shown after the label in a delimiter span.
#[derive(Debug, Default)]
pub struct LinkPlugin;

impl SyntaxPlugin for LinkPlugin {
    fn name(&self) -> &'static str {
        "link"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Inline
    }

    fn priority(&self) -> i32 {
        50
    }

    fn patterns(&self) -> &[Pattern] {
        &PATTERNS
    }

    fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        Some(Token::new(kinds::LINK, m.group(1)?).with_url(m.group(2)?))
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        let url = token.url.as_deref()?;
        // `href` is already escaped, so the attribute is written by hand.
        let anchor = format!(
            r#"<a href="{}" class="md-link" target="_blank" rel="noopener">{}</a>"#,
            ctx.href(url),
            ctx.escape(&token.content)
        );
        let target = ctx.element(
            "span",
            &[("class", "md-delimiter")],
            &format!("({})", ctx.escape(url)),
        );
        Some(anchor + &target)
    }
}
