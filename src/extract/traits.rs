//! Recognizer trait definition

use crate::extract::table::{MergePolicy, PatchTable};

/// A pattern-matching rule targeting one changelog idiom.
///
/// Recognizers are pure: each scans the full document text and returns its
/// own candidate table. The extractor folds the tables together in a fixed
/// order, so precedence between idioms lives in one place instead of being
/// interleaved with the matching itself.
pub trait Recognizer {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// How this recognizer's findings merge into the accumulated table
    fn policy(&self) -> MergePolicy;

    /// Scan the text and return candidate version/description pairs
    fn recognize(&self, text: &str) -> PatchTable;
}

/// Error type for extraction
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The retrieved document had no text to scan
    #[error("no content to process")]
    EmptyInput,
}
