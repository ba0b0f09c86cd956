//! Remarketing XML document generation.
//!
//! The document shape is fixed by the downstream consumer:
//!
//! ```text
//! <Remarketing>
//!   <FileInfo> RSAClientID, FileCreateDate, ItemCount </FileInfo>
//!   <RemarketingAssignmentList>
//!     <RemarketingAssignment> ... one per record, in input order ... </RemarketingAssignment>
//!   </RemarketingAssignmentList>
//! </Remarketing>
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rmk_model::RemarketingRecord;
use tracing::{info, warn};

use crate::error::{OutputError, Result};

/// Unpadded month/day/year, the consumer's short date rendering.
pub const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Output file path: the source file's base name with an `.xml` extension,
/// inside the output directory.
#[must_use]
pub fn output_file_path(source_file: &Path, output_dir: &Path) -> PathBuf {
    let stem = source_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{stem}.xml"))
}

/// Write the remarketing document for `records` next to nothing else.
///
/// Overwrites an existing file at the target path, with a warning. Any I/O
/// failure propagates; there is no partial-write recovery.
///
/// Returns the path of the written file.
pub fn write_remarketing_xml(
    source_file: &Path,
    output_dir: &Path,
    client_id: &str,
    records: &[RemarketingRecord],
) -> Result<PathBuf> {
    let path = output_file_path(source_file, output_dir);
    if path.exists() {
        warn!("overwriting existing output file: {}", path.display());
    }

    let write = || -> io::Result<()> {
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        write_remarketing_doc(&mut writer, client_id, Local::now().date_naive(), records)?;
        writer.flush()
    };
    write().map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;

    info!("data has been written to: {}", path.display());
    Ok(path)
}

/// Serialize the document to any writer.
///
/// `create_date` is injected so tests can pin the `FileCreateDate` element;
/// the CLI passes today's date.
pub fn write_remarketing_doc<W: Write>(
    writer: W,
    client_id: &str,
    create_date: NaiveDate,
    records: &[RemarketingRecord],
) -> io::Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new("Remarketing")))?;

    xml.write_event(Event::Start(BytesStart::new("FileInfo")))?;
    text_element(&mut xml, "RSAClientID", client_id)?;
    text_element(
        &mut xml,
        "FileCreateDate",
        &create_date.format(SHORT_DATE_FORMAT).to_string(),
    )?;
    text_element(&mut xml, "ItemCount", &records.len().to_string())?;
    xml.write_event(Event::End(BytesEnd::new("FileInfo")))?;

    xml.write_event(Event::Start(BytesStart::new("RemarketingAssignmentList")))?;
    for record in records {
        write_assignment(&mut xml, record)?;
    }
    xml.write_event(Event::End(BytesEnd::new("RemarketingAssignmentList")))?;

    xml.write_event(Event::End(BytesEnd::new("Remarketing")))?;
    Ok(())
}

fn write_assignment<W: Write>(xml: &mut Writer<W>, record: &RemarketingRecord) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("RemarketingAssignment")))?;
    text_element(xml, "VIN", &record.vin)?;
    text_element(xml, "AccountNumber", &record.account_number)?;
    text_element(xml, "Year", &record.year)?;
    text_element(xml, "Make", &record.make)?;
    text_element(xml, "Model", &record.model)?;
    text_element(xml, "Mileage", &record.mileage.to_string())?;
    text_element(
        xml,
        "RepoDate",
        &record.date_of_repo.format(SHORT_DATE_FORMAT).to_string(),
    )?;
    text_element(
        xml,
        "ClearDate",
        &record.date_of_clear.format(SHORT_DATE_FORMAT).to_string(),
    )?;
    // f64 Display is locale-independent; whole balances render without ".0".
    text_element(xml, "LoanBalanceAmt", &format!("{}", record.balance))?;

    xml.write_event(Event::Start(BytesStart::new("VehicleLocationInfo")))?;
    text_element(xml, "IsVehicleAtCustomerSite", "N")?;
    text_element(xml, "LocationName", &record.location_of_unit)?;
    xml.write_event(Event::End(BytesEnd::new("VehicleLocationInfo")))?;

    xml.write_event(Event::Start(BytesStart::new("CustomerInfo")))?;
    text_element(xml, "FullName", &record.full_name())?;
    xml.write_event(Event::End(BytesEnd::new("CustomerInfo")))?;

    xml.write_event(Event::End(BytesEnd::new("RemarketingAssignment")))?;
    Ok(())
}

fn text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        xml.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
