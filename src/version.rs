//! Patch version and version range model
//!
//! Changelog documents mention versions either as concrete three-part
//! identifiers ("0.47.1") or as wildcard family headers ("0.48.x") that
//! stand for a whole minor-version line.

use std::cmp::Ordering;
use std::fmt;

use semver::Version;

/// A version mentioned in a changelog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchVersion {
    /// Concrete `major.minor.patch` identifier
    Concrete(Version),
    /// `major.minor.x` header covering a whole minor family
    Wildcard { major: u64, minor: u64 },
}

impl PatchVersion {
    /// Parse a version string with exactly three dotted components.
    ///
    /// Unlike general semver parsing, partial versions ("1", "1.2") are
    /// rejected: changelog version tokens always carry all three parts.
    /// The third component may be a literal `x`.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        let major: u64 = parts[0].parse().ok()?;
        let minor: u64 = parts[1].parse().ok()?;
        if parts[2] == "x" {
            return Some(PatchVersion::Wildcard { major, minor });
        }
        let patch: u64 = parts[2].parse().ok()?;
        Some(PatchVersion::Concrete(Version::new(major, minor, patch)))
    }

    pub fn major(&self) -> u64 {
        match self {
            PatchVersion::Concrete(v) => v.major,
            PatchVersion::Wildcard { major, .. } => *major,
        }
    }

    pub fn minor(&self) -> u64 {
        match self {
            PatchVersion::Concrete(v) => v.minor,
            PatchVersion::Wildcard { minor, .. } => *minor,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, PatchVersion::Wildcard { .. })
    }

    /// Ordering key: a wildcard sorts after every concrete patch of its
    /// major.minor family.
    pub fn sort_key(&self) -> (u64, u64, u64) {
        match self {
            PatchVersion::Concrete(v) => (v.major, v.minor, v.patch),
            PatchVersion::Wildcard { major, minor } => (*major, *minor, u64::MAX),
        }
    }
}

impl Ord for PatchVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for PatchVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PatchVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchVersion::Concrete(v) => write!(f, "{}", v),
            PatchVersion::Wildcard { major, minor } => write!(f, "{}.{}.x", major, minor),
        }
    }
}

/// A single version or a contiguous span of patches within one minor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    Single(PatchVersion),
    Span { start: Version, end: Version },
}

impl VersionRange {
    pub fn single(version: PatchVersion) -> Self {
        VersionRange::Single(version)
    }

    /// Span over every integer patch between `start` and `end`.
    /// Both ends must share major.minor, with patches in order.
    pub fn span(start: Version, end: Version) -> Option<Self> {
        if start.major == end.major && start.minor == end.minor && start.patch <= end.patch {
            Some(VersionRange::Span { start, end })
        } else {
            None
        }
    }

    /// The highest version this range covers.
    pub fn end(&self) -> PatchVersion {
        match self {
            VersionRange::Single(v) => v.clone(),
            VersionRange::Span { end, .. } => PatchVersion::Concrete(end.clone()),
        }
    }

    pub(crate) fn end_key(&self) -> (u64, u64, u64) {
        self.end().sort_key()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRange::Single(v) => write!(f, "{}", v),
            VersionRange::Span { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}
