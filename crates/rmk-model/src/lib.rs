//! Remarketing data model definitions.

pub mod config;
pub mod error;
pub mod record;

pub use config::{ClientConfig, SourceColumnMap};
pub use error::{ModelError, Result};
pub use record::RemarketingRecord;
