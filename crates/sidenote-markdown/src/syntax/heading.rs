//! Headings: `# H1`, `## H2`, `### H3`.

use std::sync::LazyLock;

use crate::plugin::{LineContext, Pattern, PluginKind, SyntaxMatch, SyntaxPlugin};
use crate::render::RenderContext;
use crate::token::{Token, kinds};

/// Longest prefix first so `###` is never read as `#`.
static PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::parse(r"^###\s+(.+)$").unwrap(),
        Pattern::parse(r"^##\s+(.+)$").unwrap(),
        Pattern::parse(r"^#\s+(.+)$").unwrap(),
    ]
});

/// Heading levels 1-3. Deeper headings are not recognized.
#[derive(Debug, Default)]
pub struct HeadingPlugin;

impl SyntaxPlugin for HeadingPlugin {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Block
    }

    fn priority(&self) -> i32 {
        100
    }

    fn patterns(&self) -> &[Pattern] {
        &PATTERNS
    }

    fn create_token(&self, m: &SyntaxMatch<'_>, _ctx: &LineContext<'_>) -> Option<Token> {
        let hashes = m.as_str().bytes().take_while(|&b| b == b'#').count();
        let level = u8::try_from(hashes).ok()?;
        Some(Token::new(kinds::HEADING, m.group(1)?).with_level(level))
    }

    fn render(&self, token: &Token, ctx: &RenderContext) -> Option<String> {
        let level = token.level?.clamp(1, 3);
        let delimiter = format!("{} ", "#".repeat(usize::from(level)));
        let class = format!("md-h{level}");
        let inner = format!(
            "{}{}",
            ctx.element("span", &[("class", "md-delimiter")], &delimiter),
            ctx.escape(&token.content)
        );
        Some(ctx.element("div", &[("class", class.as_str())], &inner))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MarkdownEngine;

    fn engine() -> MarkdownEngine {
        let mut engine = MarkdownEngine::new();
        engine.register(HeadingPlugin).unwrap();
        engine
    }

    #[test]
    fn test_levels() {
        let engine = engine();
        for (input, level) in [("# a", 1), ("## a", 2), ("### a", 3)] {
            assert_eq!(
                engine.parse(input),
                vec![Token::new(kinds::HEADING, "a").with_level(level)],
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_four_hashes_is_plain_text() {
        assert_eq!(engine().parse("#### text"), vec![Token::text("#### text")]);
    }

    #[test]
    fn test_requires_space_and_content() {
        let engine = engine();
        assert_eq!(engine.parse("#tag"), vec![Token::text("#tag")]);
        assert_eq!(engine.parse("#"), vec![Token::text("#")]);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            engine().process("## Sub <title>"),
            r#"<div class="md-h2"><span class="md-delimiter">## </span>Sub &lt;title&gt;</div>"#
        );
    }
}
