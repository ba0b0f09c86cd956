//! Remarketing data ingestion: workbook loading, typed cell coercion, and
//! row extraction.

pub mod cell;
pub mod error;
pub mod extract;
pub mod reader;

pub use cell::{cell_date, cell_f64, cell_i64, cell_string};
pub use error::{IngestError, Result};
pub use extract::extract_record;
pub use reader::read_records;
