//! Final whitespace cleanup of rendered Markdown.

use regex::Regex;

/// Post-processing applied to the assembled output.
pub(crate) struct CleanupPipeline {
    excess_newlines: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline.
    pub fn new() -> Self {
        Self {
            excess_newlines: Regex::new(r"\n{3,}").expect("static pattern is valid"),
        }
    }

    /// Collapse runs of three or more newlines to a single blank line and
    /// trim surrounding whitespace.
    pub fn process(&self, text: &str) -> String {
        self.excess_newlines
            .replace_all(text, "\n\n")
            .trim()
            .to_string()
    }
}
