//! Version consolidation
//!
//! Collapses table entries that share a description into contiguous patch
//! ranges and orders the result newest-first. Wildcard and malformed keys
//! never participate in range-building; a wildcard key survives as its own
//! single-entry record.

use indexmap::IndexMap;
use semver::Version;

use crate::config::MIN_DESCRIPTION_LEN;
use crate::extract::PatchTable;
use crate::version::{PatchVersion, VersionRange};

/// One consolidated output row.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchRecord {
    pub range: VersionRange,
    pub description: String,
}

/// Merge versions with identical descriptions into maximal contiguous
/// ranges, returning records sorted by descending end version.
///
/// Every table key that survives filtering appears in exactly one record,
/// and no two records could be merged further under the adjacency rule
/// (same major.minor, unit patch increment, identical description).
pub fn consolidate(table: &PatchTable) -> Vec<PatchRecord> {
    // Invert the table: group version keys by identical description,
    // preserving first-seen order
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for (version, desc) in table.iter() {
        groups.entry(desc).or_default().push(version);
    }

    let mut records = Vec::new();
    for (desc, versions) in groups {
        if desc.len() < MIN_DESCRIPTION_LEN {
            continue;
        }

        let mut concrete: Vec<Version> = Vec::new();
        let mut wildcards: Vec<PatchVersion> = Vec::new();
        for version in versions {
            match PatchVersion::parse(version) {
                Some(PatchVersion::Concrete(v)) if v.major == 0 => concrete.push(v),
                Some(w @ PatchVersion::Wildcard { .. }) => wildcards.push(w),
                _ => {}
            }
        }

        concrete.sort();

        let mut run: Vec<Version> = Vec::new();
        for version in concrete {
            let adjacent = run.last().is_some_and(|prev| {
                prev.major == version.major
                    && prev.minor == version.minor
                    && prev.patch + 1 == version.patch
            });
            if run.is_empty() || adjacent {
                run.push(version);
            } else {
                records.push(record_from_run(&run, desc));
                run = vec![version];
            }
        }
        if !run.is_empty() {
            records.push(record_from_run(&run, desc));
        }

        for wildcard in wildcards {
            records.push(PatchRecord {
                range: VersionRange::single(wildcard),
                description: desc.to_string(),
            });
        }
    }

    // Newest first, by the highest version each record covers; stable on
    // ties
    records.sort_by(|a, b| b.range.end_key().cmp(&a.range.end_key()));
    records
}

fn record_from_run(run: &[Version], desc: &str) -> PatchRecord {
    let range = if run.len() == 1 {
        VersionRange::single(PatchVersion::Concrete(run[0].clone()))
    } else {
        // A run is contiguous within one minor line, so the span is valid
        VersionRange::Span {
            start: run[0].clone(),
            end: run[run.len() - 1].clone(),
        }
    };
    PatchRecord {
        range,
        description: desc.to_string(),
    }
}

/// First record (in output order) ending at a concrete `0.*` version with a
/// meaningful description, formatted as `"{range} - {description}"`.
pub fn latest_patch(records: &[PatchRecord]) -> Option<String> {
    records
        .iter()
        .find(|record| {
            let end = record.range.end();
            !end.is_wildcard() && end.major() == 0 && record.description.len() >= MIN_DESCRIPTION_LEN
        })
        .map(|record| format!("{} - {}", record.range, record.description))
}
