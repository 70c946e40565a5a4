//! Line-oriented tokenizer.
//!
//! Lines are processed one at a time with two states: outside or inside a
//! fenced code block. Outside a fence, block plugins get the first chance at
//! the whole line; if none matches, inline plugins split the line into spans.

use crate::fence::{FenceEvent, FenceTracker, FencedBlock};
use crate::plugin::{LineContext, PluginKind, SyntaxMatch, SyntaxPlugin, next_boundary};
use crate::token::{Token, kinds};

/// Span of a line claimed by an inline plugin.
struct Claim {
    start: usize,
    end: usize,
    token: Token,
}

/// Tokenizer over a priority-sorted plugin list.
pub(crate) struct Tokenizer<'p> {
    block: Vec<&'p dyn SyntaxPlugin>,
    inline: Vec<&'p dyn SyntaxPlugin>,
}

impl<'p> Tokenizer<'p> {
    /// Split plugins (already in priority order) by kind.
    pub(crate) fn new(plugins: impl IntoIterator<Item = &'p dyn SyntaxPlugin>) -> Self {
        let (block, inline) = plugins
            .into_iter()
            .partition(|p| p.kind() == PluginKind::Block);
        Self { block, inline }
    }

    /// Tokenize a whole document.
    pub(crate) fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        if text.is_empty() {
            return tokens;
        }

        let mut fence = FenceTracker::new();
        for (line_index, raw) in text.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            match fence.update(line) {
                FenceEvent::Closed(block) => tokens.push(code_block_token(block)),
                FenceEvent::Consumed => {}
                FenceEvent::Outside => {
                    let ctx = LineContext { line, line_index };
                    self.tokenize_line(&ctx, &mut tokens);
                }
            }
        }

        if let Some(block) = fence.finish() {
            tracing::debug!(
                lang = %block.lang,
                bytes = block.content.len(),
                "Unterminated code fence flushed as code block"
            );
            tokens.push(code_block_token(block));
        }

        tokens
    }

    fn tokenize_line(&self, ctx: &LineContext<'_>, out: &mut Vec<Token>) {
        if let Some(token) = self.match_block(ctx) {
            out.push(token);
        } else {
            self.tokenize_inline(ctx, out);
        }
    }

    /// First block plugin whose pattern matches and whose factory yields a token.
    fn match_block(&self, ctx: &LineContext<'_>) -> Option<Token> {
        for plugin in &self.block {
            for (index, pattern) in plugin.patterns().iter().enumerate() {
                let Some(captures) = pattern.captures(ctx.line) else {
                    continue;
                };
                if let Some(token) = plugin.create_token(&SyntaxMatch::new(captures, index), ctx) {
                    return Some(token);
                }
            }
        }
        None
    }

    /// Split a line into inline tokens.
    ///
    /// Plugins run in priority order; a match overlapping a span already
    /// claimed by an earlier plugin or pattern is discarded.
    fn tokenize_inline(&self, ctx: &LineContext<'_>, out: &mut Vec<Token>) {
        let line = ctx.line;
        if line.is_empty() {
            return;
        }

        let mut claims: Vec<Claim> = Vec::new();
        for plugin in &self.inline {
            for (index, pattern) in plugin.patterns().iter().enumerate() {
                let mut pos = 0;
                while let Some(captures) = pattern.captures_at(line, pos) {
                    let m = SyntaxMatch::new(captures, index);
                    let (start, end) = (m.start(), m.end());
                    if start == end {
                        pos = next_boundary(line, end);
                        continue;
                    }
                    // A later match may still start inside the rejected one.
                    if let Some(claim) = claims.iter().find(|c| start < c.end && c.start < end) {
                        pos = next_boundary(line, start).max(claim.end);
                        continue;
                    }
                    let token = plugin
                        .create_token(&m, ctx)
                        .unwrap_or_else(|| Token::text(m.as_str()));
                    claims.push(Claim { start, end, token });
                    pos = end;
                }
            }
        }

        if claims.is_empty() {
            out.push(Token::text(line));
            return;
        }

        claims.sort_by_key(|c| c.start);
        let mut pos = 0;
        for claim in claims {
            if claim.start > pos {
                out.push(Token::text(&line[pos..claim.start]));
            }
            out.push(claim.token);
            pos = claim.end;
        }
        if pos < line.len() {
            out.push(Token::text(&line[pos..]));
        }
    }
}

fn code_block_token(block: FencedBlock) -> Token {
    Token::new(kinds::CODE_BLOCK, block.content).with_lang(block.lang)
}
