//! Extraction layer
//! - traits.rs: Recognizer trait definition
//! - table.rs: PatchTable accumulator and merge policies
//! - cleaner.rs: description normalization
//! - inline.rs: chained `version: description -` sequences
//! - line_start.rs: versions opening a line
//! - ranges.rs: explicit, abbreviated, and bracketed range mentions
//! - wildcard.rs: `X.Y.x` family headers
//! - extractor.rs: ordered recognizer pipeline

pub mod cleaner;
pub mod extractor;
pub mod inline;
pub mod line_start;
pub mod ranges;
pub mod table;
pub mod traits;
pub mod wildcard;

pub use cleaner::DescriptionCleaner;
pub use extractor::Extractor;
pub use table::{MergePolicy, PatchTable};
pub use traits::{ExtractError, Recognizer};

use regex::Regex;

use crate::config::{MIN_DESCRIPTION_LEN, VERSION_FAMILY_PREFIX};

/// Gate a candidate (version, raw description) pair.
///
/// The version must lie in the expected major family and the cleaned
/// description must be long enough to be a real release note. Returns the
/// cleaned description on success.
pub(crate) fn accept_candidate(
    cleaner: &DescriptionCleaner,
    version: &str,
    raw: &str,
) -> Option<String> {
    if !version.starts_with(VERSION_FAMILY_PREFIX) {
        return None;
    }
    let desc = cleaner.clean(raw);
    if desc.len() < MIN_DESCRIPTION_LEN {
        return None;
    }
    Some(desc)
}

/// Slice of `text` starting at `from` and ending at the first `boundary_re`
/// hit (or the end of the text).
pub(crate) fn slice_until<'a>(text: &'a str, from: usize, boundary_re: &Regex) -> &'a str {
    let tail = &text[from..];
    let end = boundary_re.find(tail).map(|m| m.start()).unwrap_or(tail.len());
    &tail[..end]
}
