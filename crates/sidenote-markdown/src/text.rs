//! Plain-text helpers: marker stripping, previews, markdown detection.
//!
//! These work on raw text with fixed regular expressions and do not consult
//! any registered plugin.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

pub use sidenote_config::DEFAULT_PREVIEW_LENGTH;

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\w*\n?|```").unwrap());

/// Prose replacements, applied in order.
static PROSE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?mR)^#{1,3}\s+", ""),
        (r"\*\*([^*]+?)\*\*", "$1"),
        (r"\*([^*]+?)\*", "$1"),
        (r"`([^`]+?)`", "$1"),
        (r"\[([^\]]+?)\]\([^)]+?\)", "$1"),
        (r"(?mR)^>\s*", ""),
        (r"(?mR)^[-*]\s+", "• "),
        (r"(?mR)^\d+\.\s+", ""),
        (r"(?mR)^[-*]{3,}$", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static MARKDOWN_HINTS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?mR)^#{1,3}\s",
        r"\*\*[^*]+\*\*",
        r"\*[^*]+\*",
        r"`[^`]+`",
        r"(?s)```.*?```",
        r"\[[^\]]+\]\([^)]+\)",
        r"(?mR)^>\s",
        r"(?mR)^[-*]\s",
        r"(?mR)^\d+\.\s",
        r"(?mR)^[-*]{3,}$",
    ])
    .unwrap()
});

/// Remove markdown markers, keeping the readable text.
///
/// Fenced code blocks are handled first: the fences go, the body is kept
/// untouched. The rest of the text loses heading, emphasis, code, link,
/// quote and rule markers; unordered list markers become `• `.
///
/// # Example
///
/// ```
/// use sidenote_markdown::strip_markdown;
///
/// assert_eq!(
///     strip_markdown("# Title\n\n**bold** and *italic*"),
///     "Title\n\nbold and italic"
/// );
/// ```
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut pos = 0;
    for block in CODE_BLOCK.find_iter(text) {
        output.push_str(&strip_prose(&text[pos..block.start()]));
        output.push_str(&CODE_FENCE.replace_all(block.as_str(), ""));
        pos = block.end();
    }
    output.push_str(&strip_prose(&text[pos..]));

    BLANK_RUNS.replace_all(&output, "\n\n").trim().to_owned()
}

fn strip_prose(text: &str) -> String {
    PROSE_RULES
        .iter()
        .fold(text.to_owned(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        })
}

/// Single-line plain-text preview, at most `max_length` characters plus `...`.
///
/// ```
/// use sidenote_markdown::preview;
///
/// assert_eq!(preview("Hello world", 5), "Hello...");
/// assert_eq!(preview("**Hi**\nthere", 30), "Hi there");
/// ```
#[must_use]
pub fn preview(text: &str, max_length: usize) -> String {
    let oneline = strip_markdown(text).replace('\n', " ");
    match oneline.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}...", &oneline[..cut]),
        None => oneline,
    }
}

/// Whether `text` contains anything that looks like markdown.
///
/// A lone `*` is not emphasis:
///
/// ```
/// use sidenote_markdown::has_markdown;
///
/// assert!(has_markdown("- item"));
/// assert!(!has_markdown("50% * 2"));
/// ```
#[must_use]
pub fn has_markdown(text: &str) -> bool {
    MARKDOWN_HINTS.is_match(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_strip_heading_and_emphasis() {
        assert_eq!(
            strip_markdown("# Title\n\n**bold** and *italic*"),
            "Title\n\nbold and italic"
        );
    }

    #[test]
    fn test_strip_code_block_body_untouched() {
        assert_eq!(
            strip_markdown("before\n```js\nlet *a* = `b`;\n```\nafter"),
            "before\nlet *a* = `b`;\n\nafter"
        );
    }

    #[test]
    fn test_strip_links_quotes_lists() {
        let input = "> quoted\n- one\n* two\n3. three\n[docs](https://example.com)";
        assert_eq!(strip_markdown(input), "quoted\n• one\n• two\nthree\ndocs");
    }

    #[test]
    fn test_strip_rule_and_blank_runs() {
        assert_eq!(strip_markdown("a\n\n---\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_strip_crlf_line_anchors() {
        assert_eq!(strip_markdown("a\r\n---\r\nb"), "a\r\n\r\nb");
        assert_eq!(
            strip_markdown("## Title\r\n> quote\r\n- item"),
            "Title\r\nquote\r\n• item"
        );
    }

    #[test]
    fn test_strip_inline_code() {
        assert_eq!(strip_markdown("run `cargo doc` now"), "run cargo doc now");
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_markdown(""), "");
        assert_eq!(strip_markdown("\n\n  \n"), "");
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("Hello world", 5), "Hello...");
    }

    #[test]
    fn test_preview_exact_length_not_truncated() {
        assert_eq!(preview("Hello", 5), "Hello");
    }

    #[test]
    fn test_preview_flattens_lines() {
        assert_eq!(preview("# Note\n\nbody", 30), "Note  body");
    }

    #[test]
    fn test_preview_counts_chars() {
        assert_eq!(preview("日本語のメモ", 3), "日本語...");
    }

    #[test]
    fn test_preview_default_length() {
        let text = "x".repeat(40);
        let expected = format!("{}...", "x".repeat(DEFAULT_PREVIEW_LENGTH));
        assert_eq!(preview(&text, DEFAULT_PREVIEW_LENGTH), expected);
    }

    #[test]
    fn test_has_markdown_plain() {
        assert!(!has_markdown("plain text"));
        assert!(!has_markdown(""));
        assert!(!has_markdown("#hashtag"));
    }

    #[test]
    fn test_has_markdown_crlf_rule() {
        assert!(has_markdown("intro\r\n---\r\n"));
        assert!(has_markdown("intro\r\n***"));
        assert!(!has_markdown("plain\r\ntext\r\n"));
    }

    #[test]
    fn test_has_markdown_lone_asterisk() {
        assert!(!has_markdown("50% * 2"));
    }

    #[test]
    fn test_has_markdown_detects_each_construct() {
        for input in [
            "## Heading",
            "**bold**",
            "*italic*",
            "`code`",
            "```\nfenced\n```",
            "[label](url)",
            "> quote",
            "- item",
            "1. first",
            "***",
            "intro\n---",
        ] {
            assert!(has_markdown(input), "input: {input:?}");
        }
    }
}
