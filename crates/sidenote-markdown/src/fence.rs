//! Fenced code block tracking for line-by-line tokenizing.
//!
//! A line whose trimmed content starts with three backticks opens a fence;
//! the next such line closes it. Lines in between are collected verbatim.

/// Fence marker opening and closing a code block.
pub(crate) const FENCE: &str = "```";

/// A code block collected between two fence lines.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FencedBlock {
    pub(crate) lang: String,
    pub(crate) content: String,
}

/// Result of offering a line to the tracker.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FenceEvent {
    /// Line is ordinary content outside a fence.
    Outside,
    /// Line was consumed (fence opening or fenced content).
    Consumed,
    /// Line closed a fence.
    Closed(FencedBlock),
}

/// Tracks fence state during line-by-line processing.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Language of the open fence; `None` when outside a fence.
    lang: Option<String>,
    /// Lines collected since the opening fence.
    lines: Vec<String>,
}

impl FenceTracker {
    /// Create a new fence tracker.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.lang.is_some()
    }

    /// Update fence state based on a line.
    pub(crate) fn update(&mut self, line: &str) -> FenceEvent {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(FENCE) {
            return match self.lang.take() {
                Some(lang) => FenceEvent::Closed(FencedBlock {
                    lang,
                    content: std::mem::take(&mut self.lines).join("\n"),
                }),
                None => {
                    self.lang = Some(rest.trim().to_owned());
                    self.lines.clear();
                    FenceEvent::Consumed
                }
            };
        }

        if self.in_fence() {
            self.lines.push(line.to_owned());
            FenceEvent::Consumed
        } else {
            FenceEvent::Outside
        }
    }

    /// Close an unterminated fence at end of input.
    ///
    /// Returns the collected block, or `None` when no fence is open.
    pub(crate) fn finish(&mut self) -> Option<FencedBlock> {
        let lang = self.lang.take()?;
        Some(FencedBlock {
            lang,
            content: std::mem::take(&mut self.lines).join("\n"),
        })
    }
}
