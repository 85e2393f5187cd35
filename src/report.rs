//! Consolidated output sink

use std::path::Path;

use tracing::info;

use crate::consolidate::PatchRecord;

/// Error type for the CSV sink
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes consolidated records as two-column CSV
pub struct CsvSink;

impl CsvSink {
    /// Write a `Version, Description` header followed by one row per
    /// record, in the given order.
    pub fn write(path: &Path, records: &[PatchRecord]) -> Result<(), SinkError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["Version", "Description"])?;
        for record in records {
            writer.write_record([record.range.to_string(), record.description.clone()])?;
        }
        writer.flush()?;

        info!("Wrote {} consolidated patches to {}", records.len(), path.display());
        Ok(())
    }
}
