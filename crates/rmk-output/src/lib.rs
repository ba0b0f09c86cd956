//! Remarketing XML output generation.

pub mod error;
pub mod xml;

pub use error::{OutputError, Result};
pub use xml::{SHORT_DATE_FORMAT, output_file_path, write_remarketing_doc, write_remarketing_xml};
