//! End-to-end orchestration: fetch, extract, consolidate, report

use std::path::Path;

use tracing::{error, info, warn};

use crate::consolidate::{consolidate, latest_patch};
use crate::extract::Extractor;
use crate::fetch::ChangelogFetcher;
use crate::report::CsvSink;

/// Fetch the changelog at `url`, extract and consolidate its patches, print
/// the latest one, and persist the full list to `output`.
///
/// A failed CSV write is reported but does not fail the run: the
/// consolidation result has already been produced and printed.
pub async fn run(
    fetcher: &dyn ChangelogFetcher,
    url: &str,
    output: &Path,
) -> anyhow::Result<()> {
    info!("Fetching changelog from {}", url);
    let markdown = fetcher.fetch_markdown(url).await?;

    let extractor = Extractor::new();
    let table = extractor.extract(&markdown)?;
    info!("Found {} unique patch versions with descriptions", table.len());

    let records = consolidate(&table);

    match latest_patch(&records) {
        Some(latest) => println!("Latest patch: {}", latest),
        None => println!("No specific patch note found in the changelog"),
    }

    if records.is_empty() {
        warn!("No patches found, skipping CSV output");
        return Ok(());
    }

    if let Err(e) = CsvSink::write(output, &records) {
        error!("Failed to write {}: {}", output.display(), e);
    }

    Ok(())
}
