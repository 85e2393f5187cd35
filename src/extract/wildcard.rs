//! Wildcard header recognizer
//!
//! Targets minor-family headers followed by a summary paragraph:
//!
//! ```text
//! 0.48.x
//! Agent planning improvements for long running tasks
//! ```
//!
//! The whole paragraph (up to the next blank line or version heading)
//! becomes the description, keyed by the literal wildcard string.

use regex::Regex;

use crate::extract::accept_candidate;
use crate::extract::cleaner::DescriptionCleaner;
use crate::extract::slice_until;
use crate::extract::table::{MergePolicy, PatchTable};
use crate::extract::traits::Recognizer;

pub struct WildcardHeaderRecognizer {
    /// `X.Y.x` opening a line, followed by whitespace
    header_re: Regex,
    /// Next blank line or version heading
    boundary_re: Regex,
    cleaner: DescriptionCleaner,
}

impl WildcardHeaderRecognizer {
    pub fn new() -> Self {
        Self {
            header_re: Regex::new(r"(?m)^(\d+\.\d+\.x)\s").unwrap(),
            boundary_re: Regex::new(r"\n\n|\n\d+\.\d+\.").unwrap(),
            cleaner: DescriptionCleaner::new(),
        }
    }
}

impl Default for WildcardHeaderRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for WildcardHeaderRecognizer {
    fn name(&self) -> &'static str {
        "wildcard-header"
    }

    fn policy(&self) -> MergePolicy {
        MergePolicy::KeepExisting
    }

    fn recognize(&self, text: &str) -> PatchTable {
        let mut table = PatchTable::new();

        for caps in self.header_re.captures_iter(text) {
            let head = caps.get(0).unwrap();
            let version = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let raw = slice_until(text, head.end(), &self.boundary_re);

            if let Some(desc) = accept_candidate(&self.cleaner, version, raw) {
                table.insert(version.to_string(), desc, MergePolicy::KeepExisting);
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_paragraph_becomes_one_wildcard_entry() {
        let recognizer = WildcardHeaderRecognizer::new();
        let text = "0.48.x\nAgent planning improvements for long tasks\n\n0.47.x\nEarlier summary paragraph here\n";

        let table = recognizer.recognize(text);

        assert_eq!(
            table.get("0.48.x"),
            Some("Agent planning improvements for long tasks")
        );
        assert_eq!(table.get("0.47.x"), Some("Earlier summary paragraph here"));
    }

    #[test]
    fn paragraph_stops_at_next_version_heading() {
        let recognizer = WildcardHeaderRecognizer::new();
        let text = "0.48.x\nSummary of the release line\n0.48.1: specific note\n";

        let table = recognizer.recognize(text);

        assert_eq!(table.get("0.48.x"), Some("Summary of the release line"));
    }

    #[test]
    fn header_must_open_a_line() {
        let recognizer = WildcardHeaderRecognizer::new();
        let table = recognizer.recognize("as of 0.48.x the behaviour changed noticeably\n");

        assert!(table.is_empty());
    }

    #[test]
    fn non_zero_major_headers_are_skipped() {
        let recognizer = WildcardHeaderRecognizer::new();
        let table = recognizer.recognize("1.4.x\nA perfectly long summary paragraph\n");

        assert!(table.is_empty());
    }
}
