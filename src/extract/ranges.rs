//! Range mention recognizers
//!
//! Changelogs summarize a batch of small patches as a single range:
//!
//! ```text
//! UPDATE (0.45.1 - 0.45.3): Minor fixes.
//! UPDATE (0.45.12 - 14): Stability improvements
//! (0.42.1 - 0.42.5): Performance work
//! ```
//!
//! Each mention expands to one table entry per integer patch in the range.
//! The description runs until a blank line or a line starting with an
//! uppercase letter. Range descriptions never overwrite a per-version
//! mention, and a mention whose ends disagree on major.minor (or whose
//! components do not parse) is skipped silently: the document is free-form
//! and partial matches are expected.

use regex::Regex;
use tracing::{debug, warn};

use crate::config::MAX_RANGE_WIDTH;
use crate::extract::cleaner::DescriptionCleaner;
use crate::extract::table::{MergePolicy, PatchTable};
use crate::extract::traits::Recognizer;
use crate::extract::{accept_candidate, slice_until};

/// A validated range head: both ends share major.minor.
struct SpanParts {
    major: u64,
    minor: u64,
    from: u64,
    to: u64,
}

fn parse_span(
    major1: &str,
    minor1: &str,
    patch1: &str,
    major2: &str,
    minor2: &str,
    patch2: &str,
) -> Option<SpanParts> {
    let major: u64 = major1.parse().ok()?;
    let minor: u64 = minor1.parse().ok()?;
    if major2.parse::<u64>().ok()? != major || minor2.parse::<u64>().ok()? != minor {
        return None;
    }
    Some(SpanParts {
        major,
        minor,
        from: patch1.parse().ok()?,
        to: patch2.parse().ok()?,
    })
}

/// Expand a validated range into per-patch entries, gated like any other
/// candidate.
fn expand_into(table: &mut PatchTable, cleaner: &DescriptionCleaner, parts: &SpanParts, raw: &str) {
    if parts.to.saturating_sub(parts.from) > MAX_RANGE_WIDTH {
        warn!(
            "ignoring implausibly wide range {}.{}.{}-{}",
            parts.major, parts.minor, parts.from, parts.to
        );
        return;
    }

    let start = format!("{}.{}.{}", parts.major, parts.minor, parts.from);
    let Some(desc) = accept_candidate(cleaner, &start, raw) else {
        return;
    };

    for patch in parts.from..=parts.to {
        table.insert(
            format!("{}.{}.{}", parts.major, parts.minor, patch),
            desc.clone(),
            MergePolicy::KeepExisting,
        );
    }
}

/// `UPDATE (A.B.C - A.B.D): description`
pub struct ExplicitRangeRecognizer {
    head_re: Regex,
    boundary_re: Regex,
    cleaner: DescriptionCleaner,
}

impl ExplicitRangeRecognizer {
    pub fn new() -> Self {
        Self {
            head_re: Regex::new(
                r"UPDATE\s*\((\d+)\.(\d+)\.(\d+)\s*-\s*(\d+)\.(\d+)\.(\d+)\):[ \t]*",
            )
            .unwrap(),
            boundary_re: Regex::new(r"\n\n|\n[A-Z]").unwrap(),
            cleaner: DescriptionCleaner::new(),
        }
    }
}

impl Default for ExplicitRangeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for ExplicitRangeRecognizer {
    fn name(&self) -> &'static str {
        "explicit-range"
    }

    fn policy(&self) -> MergePolicy {
        MergePolicy::KeepExisting
    }

    fn recognize(&self, text: &str) -> PatchTable {
        let mut table = PatchTable::new();

        for caps in self.head_re.captures_iter(text) {
            let head = caps.get(0).unwrap();
            let Some(parts) = parse_span(&caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6])
            else {
                debug!("skipping malformed range mention: {}", head.as_str().trim());
                continue;
            };
            let raw = slice_until(text, head.end(), &self.boundary_re);
            expand_into(&mut table, &self.cleaner, &parts, raw);
        }

        table
    }
}

/// `UPDATE (A.B.C - D): description`, with only the end patch abbreviated
pub struct AbbreviatedRangeRecognizer {
    head_re: Regex,
    boundary_re: Regex,
    cleaner: DescriptionCleaner,
}

impl AbbreviatedRangeRecognizer {
    pub fn new() -> Self {
        Self {
            head_re: Regex::new(r"UPDATE\s*\((\d+)\.(\d+)\.(\d+)\s*-\s*(\d+)\):[ \t]*").unwrap(),
            boundary_re: Regex::new(r"\n\n|\n[A-Z]").unwrap(),
            cleaner: DescriptionCleaner::new(),
        }
    }
}

impl Default for AbbreviatedRangeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for AbbreviatedRangeRecognizer {
    fn name(&self) -> &'static str {
        "abbreviated-range"
    }

    fn policy(&self) -> MergePolicy {
        MergePolicy::KeepExisting
    }

    fn recognize(&self, text: &str) -> PatchTable {
        let mut table = PatchTable::new();

        for caps in self.head_re.captures_iter(text) {
            let head = caps.get(0).unwrap();
            // The abbreviated end shares the start's major.minor by
            // construction
            let Some(parts) = parse_span(&caps[1], &caps[2], &caps[3], &caps[1], &caps[2], &caps[4])
            else {
                debug!("skipping malformed range mention: {}", head.as_str().trim());
                continue;
            };
            let raw = slice_until(text, head.end(), &self.boundary_re);
            expand_into(&mut table, &self.cleaner, &parts, raw);
        }

        table
    }
}

/// `(A.B.C - A.B.D): description`, without the UPDATE keyword
pub struct BracketedRangeRecognizer {
    head_re: Regex,
    boundary_re: Regex,
    cleaner: DescriptionCleaner,
}

impl BracketedRangeRecognizer {
    pub fn new() -> Self {
        Self {
            head_re: Regex::new(r"\((\d+)\.(\d+)\.(\d+)\s*-\s*(\d+)\.(\d+)\.(\d+)\):[ \t]*")
                .unwrap(),
            boundary_re: Regex::new(r"\n\n|\n[A-Z]").unwrap(),
            cleaner: DescriptionCleaner::new(),
        }
    }
}

impl Default for BracketedRangeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for BracketedRangeRecognizer {
    fn name(&self) -> &'static str {
        "bracketed-range"
    }

    fn policy(&self) -> MergePolicy {
        MergePolicy::KeepExisting
    }

    fn recognize(&self, text: &str) -> PatchTable {
        let mut table = PatchTable::new();

        for caps in self.head_re.captures_iter(text) {
            let head = caps.get(0).unwrap();
            let Some(parts) = parse_span(&caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6])
            else {
                debug!("skipping malformed range mention: {}", head.as_str().trim());
                continue;
            };
            let raw = slice_until(text, head.end(), &self.boundary_re);
            expand_into(&mut table, &self.cleaner, &parts, raw);
        }

        table
    }
}
