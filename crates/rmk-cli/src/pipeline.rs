//! The conversion pipeline: read rows, extract records, write XML.
//!
//! Stages run in order with no retries:
//! 1. **Read**: load the workbook and extract records until end of data
//! 2. **Check**: a read failure or an empty result fails the conversion
//! 3. **Write**: serialize the records to the output XML file

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use rmk_ingest::read_records;
use rmk_output::write_remarketing_xml;
use tracing::info;

use crate::config::ConverterConfig;

/// What a successful conversion produced.
#[derive(Debug)]
pub struct ConversionSummary {
    /// Number of records written.
    pub records: usize,
    /// Path of the output XML file.
    pub output_file: PathBuf,
}

/// Run one conversion end to end.
///
/// # Errors
///
/// Fails when the workbook cannot be read, yields zero records, or the
/// output file cannot be written.
pub fn run_convert(config: &ConverterConfig) -> Result<ConversionSummary> {
    info!(
        "converting data from {} to xml",
        config.source_file.display()
    );

    let records = read_records(&config.source_file, &config.client)
        .context("error reading data from file")?;
    if records.is_empty() {
        bail!(
            "no remarketing data found in '{}'",
            config.source_file.display()
        );
    }

    let output_file = write_remarketing_xml(
        &config.source_file,
        &config.output_path,
        &config.client.rsa_client_id,
        &records,
    )
    .context("error writing xml output file")?;

    Ok(ConversionSummary {
        records: records.len(),
        output_file,
    })
}
