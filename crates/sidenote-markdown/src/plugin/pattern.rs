//! Compiled match rules owned by plugins.
//!
//! The `regex` crate has no look-around, so a [`Pattern`] carries optional
//! single-character boundary guards checked around each candidate match.

use regex::{Captures, Regex};

/// A precompiled match rule with optional boundary guards.
///
/// Each search is stateless: there is no shared cursor between calls, so the
/// same pattern can be used from several engines at once.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use sidenote_markdown::Pattern;
///
/// // `*x*` but not the inner part of `**x**`
/// let pattern = Pattern::new(Regex::new(r"\*([^*]+?)\*").unwrap())
///     .not_preceded_by('*')
///     .not_followed_by('*');
///
/// let caps = pattern.captures("a **b** *c*").unwrap();
/// assert_eq!(&caps[1], "c");
/// ```
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    not_preceded_by: Option<char>,
    not_followed_by: Option<char>,
}

impl Pattern {
    /// Wrap a compiled regex.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            not_preceded_by: None,
            not_followed_by: None,
        }
    }

    /// Compile a regex source string into a pattern.
    pub fn parse(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::new)
    }

    /// Reject matches immediately preceded by `ch`.
    #[must_use]
    pub fn not_preceded_by(mut self, ch: char) -> Self {
        self.not_preceded_by = Some(ch);
        self
    }

    /// Reject matches immediately followed by `ch`.
    #[must_use]
    pub fn not_followed_by(mut self, ch: char) -> Self {
        self.not_followed_by = Some(ch);
        self
    }

    /// The underlying regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// First accepted match in `haystack`.
    pub fn captures<'h>(&self, haystack: &'h str) -> Option<Captures<'h>> {
        self.captures_at(haystack, 0)
    }

    /// First accepted match starting the search at byte offset `start`.
    ///
    /// Anchors such as `^` keep referring to the start of `haystack`.
    pub fn captures_at<'h>(&self, haystack: &'h str, mut start: usize) -> Option<Captures<'h>> {
        while start <= haystack.len() {
            let caps = self.regex.captures_at(haystack, start)?;
            let whole = caps.get(0)?;
            if self.accepts(haystack, whole.start(), whole.end()) {
                return Some(caps);
            }
            // Guard rejected this start position, retry from the next char.
            start = next_boundary(haystack, whole.start());
        }
        None
    }

    /// Iterate over all non-overlapping accepted matches, left to right.
    pub fn captures_iter<'p, 'h>(&'p self, haystack: &'h str) -> PatternMatches<'p, 'h> {
        PatternMatches {
            pattern: self,
            haystack,
            pos: 0,
        }
    }

    fn accepts(&self, haystack: &str, start: usize, end: usize) -> bool {
        if let Some(ch) = self.not_preceded_by
            && haystack[..start].chars().next_back() == Some(ch)
        {
            return false;
        }
        if let Some(ch) = self.not_followed_by
            && haystack[end..].chars().next() == Some(ch)
        {
            return false;
        }
        true
    }
}

/// Iterator returned by [`Pattern::captures_iter`].
pub struct PatternMatches<'p, 'h> {
    pattern: &'p Pattern,
    haystack: &'h str,
    pos: usize,
}

impl<'h> Iterator for PatternMatches<'_, 'h> {
    type Item = Captures<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.haystack.len() {
            return None;
        }
        let caps = self.pattern.captures_at(self.haystack, self.pos)?;
        let whole = caps.get(0)?;
        self.pos = if whole.is_empty() {
            next_boundary(self.haystack, whole.end())
        } else {
            whole.end()
        };
        Some(caps)
    }
}

/// Byte offset of the char boundary after `at` (or one past the end).
pub(crate) fn next_boundary(haystack: &str, at: usize) -> usize {
    at + haystack[at..].chars().next().map_or(1, char::len_utf8)
}
