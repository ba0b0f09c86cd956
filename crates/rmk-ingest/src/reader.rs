//! Workbook loading and row orchestration.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use rmk_model::{ClientConfig, RemarketingRecord};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::extract::extract_record;

/// Read all remarketing records from the first worksheet of `path`.
///
/// The whole workbook is loaded into memory, the configured number of header
/// rows is skipped, and each following row is handed to the extractor in
/// order until it signals end of data or the sheet is exhausted.
///
/// An empty result is not an error here; the caller decides whether zero
/// records constitutes a conversion failure.
///
/// # Errors
///
/// Fails when the workbook cannot be opened or parsed, has no worksheets, or
/// the configuration carries no column map.
pub fn read_records(path: &Path, config: &ClientConfig) -> Result<Vec<RemarketingRecord>> {
    let map = config
        .source_column_map
        .as_ref()
        .ok_or(IngestError::MissingColumnMap)?;

    // Legacy .xls and modern .xlsx are both in the wild for this feed, so
    // let calamine pick the backend from the file itself.
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::WorksheetRead {
            path: path.to_path_buf(),
            source,
        })?;

    // The range starts at the first used cell, not at A1. Header skipping and
    // the 1-based column map are both defined against absolute sheet
    // coordinates, so rebase rows and pad leading columns when needed.
    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let first_row = first_row as usize;
    let first_col = first_col as usize;

    let header_rows = config.header_rows();
    let mut records = Vec::new();
    let mut padded = Vec::new();
    for (offset, cells) in range.rows().enumerate() {
        let row_idx = first_row + offset;
        if row_idx < header_rows {
            continue;
        }
        let cells: &[Data] = if first_col == 0 {
            cells
        } else {
            padded.clear();
            padded.resize(first_col, Data::Empty);
            padded.extend_from_slice(cells);
            &padded
        };
        match extract_record(cells, row_idx, map) {
            Some(record) => records.push(record),
            // First empty account number ends the data; later rows are
            // not inspected.
            None => break,
        }
    }
    info!("read {} row(s) from {}", records.len(), path.display());
    Ok(records)
}
