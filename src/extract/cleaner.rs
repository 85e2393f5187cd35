//! Description normalization
//!
//! A raw fragment captured around a version mention carries markdown debris:
//! link syntax, heading markers, stray punctuation left over from a preceding
//! range token. The cleaner turns such a fragment into a standalone
//! single-line description, or an empty string when nothing salvageable
//! remains.

use regex::Regex;

/// Normalizes raw captured fragments into standalone descriptions.
pub struct DescriptionCleaner {
    /// Leading runs of stray punctuation, possibly space-separated
    leading_punct_re: Regex,
    /// Markdown link syntax `[text](url)`
    markdown_link_re: Regex,
    /// Bare URLs
    url_re: Regex,
    /// Leading markdown heading marker
    heading_re: Regex,
    /// Leftover fragment of an abbreviated range, e.g. `13): `
    range_artifact_re: Regex,
    /// Leading bracket/colon clusters
    bracket_cluster_re: Regex,
    /// Leading `nightly` tokens
    nightly_re: Regex,
    /// Newlines with surrounding whitespace
    newline_re: Regex,
    /// Runs of whitespace
    whitespace_re: Regex,
}

impl DescriptionCleaner {
    pub fn new() -> Self {
        Self {
            leading_punct_re: Regex::new(r"^(?:[.,:;\-)\]]+\s*)+").unwrap(),
            markdown_link_re: Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap(),
            url_re: Regex::new(r"https?://\S+").unwrap(),
            heading_re: Regex::new(r"^##\s*").unwrap(),
            range_artifact_re: Regex::new(r"^\d+\):\s*").unwrap(),
            bracket_cluster_re: Regex::new(r"^(?:[):\]\[]+\s*)+").unwrap(),
            nightly_re: Regex::new(r"(?i)^(?:nightly\s*)+").unwrap(),
            newline_re: Regex::new(r"\s*\n\s*").unwrap(),
            whitespace_re: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Normalize a raw fragment into a standalone description.
    ///
    /// Pure and idempotent: running the result through `clean` again
    /// returns it unchanged.
    pub fn clean(&self, raw: &str) -> String {
        let mut desc = raw.trim().to_string();

        desc = self.leading_punct_re.replace(&desc, "").into_owned();
        desc = self.markdown_link_re.replace_all(&desc, "$1").into_owned();
        desc = self.url_re.replace_all(&desc, "").into_owned();

        // Link and URL removal can expose a fresh leading punctuation run
        // (e.g. a link whose text is "-"); strip it again
        desc = desc.trim_start().to_string();
        desc = self.leading_punct_re.replace(&desc, "").into_owned();

        desc = self.heading_re.replace(&desc, "").into_owned();
        desc = self.range_artifact_re.replace(&desc, "").into_owned();
        desc = self.bracket_cluster_re.replace(&desc, "").into_owned();
        desc = self.nightly_re.replace(&desc, "").into_owned();
        desc = self.newline_re.replace_all(&desc, " ").into_owned();
        desc = self.whitespace_re.replace_all(&desc, " ").into_owned();

        let desc = desc.trim();

        // A fragment starting mid-sentence was captured past its subject
        // and is not a standalone description
        if desc.starts_with("of ") || desc.starts_with("until ") {
            return String::new();
        }

        desc.to_string()
    }
}

impl Default for DescriptionCleaner {
    fn default() -> Self {
        Self::new()
    }
}
