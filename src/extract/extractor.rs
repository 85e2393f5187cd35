//! Ordered recognizer pipeline
//!
//! Each recognizer contributes a partial table; the extractor folds them
//! together in a fixed order under each recognizer's merge policy, then
//! prunes degenerate leftovers.

use tracing::debug;

use crate::config::MIN_DESCRIPTION_LEN;
use crate::extract::inline::InlineSequenceRecognizer;
use crate::extract::line_start::LineStartRecognizer;
use crate::extract::ranges::{
    AbbreviatedRangeRecognizer, BracketedRangeRecognizer, ExplicitRangeRecognizer,
};
use crate::extract::table::PatchTable;
use crate::extract::traits::{ExtractError, Recognizer};
use crate::extract::wildcard::WildcardHeaderRecognizer;

/// Descriptions that survive cleaning but are pure markdown debris
const DEGENERATE_DESCRIPTIONS: &[&str] = &["](", "]", ")", "](http", ":", ""];

pub struct Extractor {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl Extractor {
    /// Builds the full recognizer pipeline. Specific per-version idioms come
    /// first; range expansions and wildcard headers never overwrite them.
    pub fn new() -> Self {
        Self {
            recognizers: vec![
                Box::new(InlineSequenceRecognizer::new()),
                Box::new(LineStartRecognizer::new()),
                Box::new(ExplicitRangeRecognizer::new()),
                Box::new(AbbreviatedRangeRecognizer::new()),
                Box::new(BracketedRangeRecognizer::new()),
                Box::new(WildcardHeaderRecognizer::new()),
            ],
        }
    }

    /// Scan the document and accumulate every recognized patch.
    ///
    /// Malformed fragments are skipped, never propagated; the only error is
    /// a wholly empty document.
    pub fn extract(&self, text: &str) -> Result<PatchTable, ExtractError> {
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let mut table = PatchTable::new();
        for recognizer in &self.recognizers {
            let found = recognizer.recognize(text);
            debug!(
                recognizer = recognizer.name(),
                entries = found.len(),
                "recognizer pass finished"
            );
            table.merge(found, recognizer.policy());
        }

        Self::prune(&mut table);
        Ok(table)
    }

    /// Drop entries whose description is degenerate markdown debris or too
    /// short to be a release note.
    fn prune(table: &mut PatchTable) {
        table.retain(|_, desc| {
            !DEGENERATE_DESCRIPTIONS.contains(&desc.as_str())
                && desc.len() >= MIN_DESCRIPTION_LEN
        });
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::table::MergePolicy;

    #[test]
    fn empty_input_is_an_error() {
        let extractor = Extractor::new();
        assert!(matches!(extractor.extract(""), Err(ExtractError::EmptyInput)));
        assert!(matches!(
            extractor.extract("  \n\n  "),
            Err(ExtractError::EmptyInput)
        ));
    }

    #[test]
    fn text_without_patches_yields_an_empty_table() {
        let extractor = Extractor::new();
        let table = extractor.extract("Nothing version shaped in here.").unwrap();

        assert!(table.is_empty());
    }

    #[test]
    fn longer_description_wins_regardless_of_recognizer_order() {
        let extractor = Extractor::new();

        // 0.45.3 appears twice: chained inline with a short note, and alone
        // on a line with a longer one
        let text = "0.45.3: Fixed sync glitch - 0.45.4: Minor polish everywhere\n\
                    0.45.3: Fixed sync glitch affecting large workspaces end to end\n";
        let table = extractor.extract(text).unwrap();
        assert_eq!(
            table.get("0.45.3"),
            Some("Fixed sync glitch affecting large workspaces end to end")
        );

        // Same mentions, opposite document order
        let reversed = "0.45.3: Fixed sync glitch affecting large workspaces end to end\n\
                        0.45.3: Fixed sync glitch - 0.45.4: Minor polish everywhere\n";
        let table = extractor.extract(reversed).unwrap();
        assert_eq!(
            table.get("0.45.3"),
            Some("Fixed sync glitch affecting large workspaces end to end")
        );
    }

    #[test]
    fn range_expansion_never_overwrites_a_specific_mention() {
        let extractor = Extractor::new();
        let text = "0.45.3: Fixed composer layout bug\n\
                    UPDATE (0.45.1 - 0.45.5): General stability improvements\n";

        let table = extractor.extract(text).unwrap();

        assert_eq!(table.get("0.45.3"), Some("Fixed composer layout bug"));
        for version in ["0.45.1", "0.45.2", "0.45.4", "0.45.5"] {
            assert_eq!(table.get(version), Some("General stability improvements"));
        }
    }

    #[test]
    fn prune_drops_degenerate_descriptions() {
        let mut table = PatchTable::new();
        table.insert(
            "0.45.1".into(),
            "](http".into(),
            MergePolicy::PreferLonger,
        );
        table.insert("0.45.2".into(), "short".into(), MergePolicy::PreferLonger);
        table.insert(
            "0.45.3".into(),
            "A real description".into(),
            MergePolicy::PreferLonger,
        );

        Extractor::prune(&mut table);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("0.45.3"), Some("A real description"));
    }
}
