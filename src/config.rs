use std::env;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for the changelog fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Extraction constants
// =============================================================================

/// Minimum length for a description to count as a release note.
/// Shorter fragments are markdown debris left over from cleaning.
pub const MIN_DESCRIPTION_LEN: usize = 11;

/// Version tokens outside this major family are treated as false positives
/// (e.g. "1.x" references in surrounding prose).
pub const VERSION_FAMILY_PREFIX: &str = "0.";

/// Widest patch range a single range mention may expand to.
/// A garbled document must not blow up the table.
pub const MAX_RANGE_WIDTH: u64 = 1000;

// =============================================================================
// Process configuration
// =============================================================================

/// Default changelog document to scan
pub const DEFAULT_CHANGELOG_URL: &str = "https://www.cursor.com/changelog";

/// Default output file for consolidated patches
pub const DEFAULT_OUTPUT_CSV: &str = "changelog_patches.csv";

/// Environment variable holding the Firecrawl API key
pub const API_KEY_ENV: &str = "FIRECRAWL_API_KEY";

/// Returns the scrape API key from the environment, if set and non-empty.
pub fn api_key() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}
