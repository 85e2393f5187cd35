//! Line-start recognizer
//!
//! Targets the plainest idiom: a version token opening a line, a separator,
//! and a description running to the end of the line.
//!
//! ```text
//! 0.45.6: Resolved login token refresh bug
//! ```

use regex::Regex;

use crate::extract::accept_candidate;
use crate::extract::cleaner::DescriptionCleaner;
use crate::extract::table::{MergePolicy, PatchTable};
use crate::extract::traits::Recognizer;

pub struct LineStartRecognizer {
    /// Version opening a line, optional `:`/`-` separators, rest of line
    line_re: Regex,
    cleaner: DescriptionCleaner,
}

impl LineStartRecognizer {
    pub fn new() -> Self {
        Self {
            line_re: Regex::new(r"(?m)^(\d+\.\d+\.\d+)[ \t]*:?[ \t]*-?[ \t]*(.*)$").unwrap(),
            cleaner: DescriptionCleaner::new(),
        }
    }
}

impl Default for LineStartRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for LineStartRecognizer {
    fn name(&self) -> &'static str {
        "line-start"
    }

    fn policy(&self) -> MergePolicy {
        MergePolicy::PreferLonger
    }

    fn recognize(&self, text: &str) -> PatchTable {
        let mut table = PatchTable::new();

        for caps in self.line_re.captures_iter(text) {
            let version = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let rest = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

            // An extra separator after the skipped ones, or any digit in
            // the remainder, means this line is not a simple description
            if rest.starts_with(':') || rest.starts_with('-') {
                continue;
            }
            if rest.bytes().any(|b| b.is_ascii_digit()) {
                continue;
            }

            if let Some(desc) = accept_candidate(&self.cleaner, version, rest) {
                table.insert(version.to_string(), desc, MergePolicy::PreferLonger);
            }
        }

        table
    }
}
