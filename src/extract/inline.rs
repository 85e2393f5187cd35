//! Inline sequence recognizer
//!
//! Targets prose that chains several patches on one logical line:
//!
//! ```text
//! 0.47.1: Fixed a crash - 0.47.2: Fixed a crash - 0.47.3: Improved sync
//! ```
//!
//! Each description runs from its version token up to the next version
//! token or line break. The same scan is re-applied to the body of every
//! "Patches" section, where this idiom is densest, and to every line that
//! chains two or more version groups.

use regex::Regex;

use crate::extract::cleaner::DescriptionCleaner;
use crate::extract::table::{MergePolicy, PatchTable};
use crate::extract::traits::Recognizer;
use crate::extract::{accept_candidate, slice_until};

pub struct InlineSequenceRecognizer {
    /// Concrete three-part version token
    version_re: Regex,
    /// Start of a "Patches" section heading
    section_start_re: Regex,
    /// End of a "Patches" section: the next heading
    section_end_re: Regex,
    cleaner: DescriptionCleaner,
}

impl InlineSequenceRecognizer {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r"\d+\.\d+\.\d+").unwrap(),
            section_start_re: Regex::new(r"###\s*Patches|\*\*Patches\*\*").unwrap(),
            section_end_re: Regex::new(r"###|\*\*[A-Z]").unwrap(),
            cleaner: DescriptionCleaner::new(),
        }
    }

    /// One pass over `text`: pair every version token with the fragment
    /// running to the next version token or line break.
    fn scan(&self, text: &str) -> PatchTable {
        let mut table = PatchTable::new();
        let matches: Vec<regex::Match> = self.version_re.find_iter(text).collect();

        for (i, m) in matches.iter().enumerate() {
            let next_version = matches
                .get(i + 1)
                .map(|n| n.start())
                .unwrap_or(text.len());
            let newline = text[m.end()..]
                .find('\n')
                .map(|p| m.end() + p)
                .unwrap_or(text.len());
            let boundary = next_version.min(newline);

            // Strip the separator run after the version and the trailing
            // separator before the next one
            let raw = text[m.end()..boundary]
                .trim_start_matches([':', '-', ' ', '\t'])
                .trim_end()
                .trim_end_matches('-')
                .trim_end();

            // A digit in the fragment means we ran into unrelated numeric
            // text rather than a description
            if raw.is_empty() || raw.bytes().any(|b| b.is_ascii_digit()) {
                continue;
            }

            if let Some(desc) = accept_candidate(&self.cleaner, m.as_str(), raw) {
                table.insert(m.as_str().to_string(), desc, MergePolicy::PreferLonger);
            }
        }

        table
    }
}

impl Default for InlineSequenceRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for InlineSequenceRecognizer {
    fn name(&self) -> &'static str {
        "inline-sequence"
    }

    fn policy(&self) -> MergePolicy {
        MergePolicy::PreferLonger
    }

    fn recognize(&self, text: &str) -> PatchTable {
        let mut table = self.scan(text);

        for m in self.section_start_re.find_iter(text) {
            let section = slice_until(text, m.end(), &self.section_end_re);
            table.merge(self.scan(section), MergePolicy::PreferLonger);
        }

        for line in text.lines() {
            if self.version_re.find_iter(line).count() >= 2 {
                table.merge(self.scan(line), MergePolicy::PreferLonger);
            }
        }

        table
    }
}
