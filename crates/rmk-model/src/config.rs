//! Client configuration and source column map models.
//!
//! The client configuration is supplied as a JSON file whose field names use
//! PascalCase (`RsaClientId`, `NumberOfHeaderRows`, `SourceColumnMap`). Column
//! indices are 1-based; an absent entry means the field has no source column
//! and receives its type default during extraction.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Per-client conversion settings loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientConfig {
    /// Client identifier written into the output XML `RSAClientID` element.
    #[serde(default)]
    pub rsa_client_id: String,

    /// Rows to skip at the top of the worksheet before data begins.
    #[serde(default = "default_header_rows")]
    pub number_of_header_rows: i64,

    /// Mapping from semantic fields to 1-based worksheet columns.
    #[serde(default)]
    pub source_column_map: Option<SourceColumnMap>,
}

fn default_header_rows() -> i64 {
    3
}

impl ClientConfig {
    /// Check the configuration invariants required before any conversion work.
    ///
    /// # Errors
    ///
    /// Returns the first failing invariant: empty client id, negative header
    /// row count, missing column map, or missing account-number mapping.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.rsa_client_id.is_empty() {
            return Err(ModelError::MissingClientId);
        }
        if self.number_of_header_rows < 0 {
            return Err(ModelError::InvalidHeaderRows {
                value: self.number_of_header_rows,
            });
        }
        let map = self
            .source_column_map
            .as_ref()
            .ok_or(ModelError::MissingColumnMap)?;
        if map.account_number.is_none() {
            return Err(ModelError::MissingAccountNumberColumn);
        }
        Ok(())
    }

    /// Header row count as a row offset. Only meaningful after [`validate`].
    ///
    /// [`validate`]: ClientConfig::validate
    #[must_use]
    pub fn header_rows(&self) -> usize {
        usize::try_from(self.number_of_header_rows).unwrap_or(0)
    }

    /// A fully-mapped sample configuration, useful as a starting point for a
    /// new client file.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            rsa_client_id: "1234567890".to_string(),
            number_of_header_rows: 3,
            source_column_map: Some(SourceColumnMap {
                account_number: Some(1),
                loan_number: Some(2),
                last_name: Some(3),
                first_name: Some(4),
                loan_balance: Some(5),
                year: Some(6),
                make: Some(7),
                model: Some(8),
                vin: Some(9),
                mileage: Some(10),
                repo_agent_name: Some(11),
                repo_agents_lookup: Some(12),
                location_of_unit: Some(13),
                date_of_repo: Some(14),
                date_of_clear: Some(15),
            }),
        }
    }
}

/// Optional 1-based column indices for every semantic field of a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SourceColumnMap {
    /// string; mandatory for conversion.
    pub account_number: Option<u32>,
    /// string
    pub loan_number: Option<u32>,
    /// string
    pub last_name: Option<u32>,
    /// string
    pub first_name: Option<u32>,
    /// decimal
    pub loan_balance: Option<u32>,
    /// string
    pub year: Option<u32>,
    /// string
    pub make: Option<u32>,
    /// string
    pub model: Option<u32>,
    /// string
    pub vin: Option<u32>,
    /// integer
    pub mileage: Option<u32>,
    /// string
    pub repo_agent_name: Option<u32>,
    /// string
    pub repo_agents_lookup: Option<u32>,
    /// string
    pub location_of_unit: Option<u32>,
    /// date
    pub date_of_repo: Option<u32>,
    /// date
    pub date_of_clear: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ClientConfig {
        ClientConfig {
            rsa_client_id: "ACME01".to_string(),
            number_of_header_rows: 3,
            source_column_map: Some(SourceColumnMap {
                account_number: Some(1),
                ..SourceColumnMap::default()
            }),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn empty_client_id_fails() {
        let mut config = valid_config();
        config.rsa_client_id.clear();
        assert!(matches!(
            config.validate(),
            Err(ModelError::MissingClientId)
        ));
    }

    #[test]
    fn negative_header_rows_fails() {
        let mut config = valid_config();
        config.number_of_header_rows = -1;
        assert!(matches!(
            config.validate(),
            Err(ModelError::InvalidHeaderRows { value: -1 })
        ));
    }

    #[test]
    fn missing_column_map_fails() {
        let mut config = valid_config();
        config.source_column_map = None;
        assert!(matches!(
            config.validate(),
            Err(ModelError::MissingColumnMap)
        ));
    }

    #[test]
    fn missing_account_number_fails() {
        let mut config = valid_config();
        config.source_column_map = Some(SourceColumnMap::default());
        assert!(matches!(
            config.validate(),
            Err(ModelError::MissingAccountNumberColumn)
        ));
    }

    #[test]
    fn header_rows_defaults_to_three() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "RsaClientId": "ACME01" }"#).expect("parse config");
        assert_eq!(config.number_of_header_rows, 3);
        assert!(config.source_column_map.is_none());
    }

    #[test]
    fn parses_pascal_case_fields() {
        let json = r#"{
            "RsaClientId": "ACME01",
            "NumberOfHeaderRows": 1,
            "SourceColumnMap": { "AccountNumber": 2, "Vin": 9, "DateOfRepo": 14 }
        }"#;
        let config: ClientConfig = serde_json::from_str(json).expect("parse config");
        assert_eq!(config.rsa_client_id, "ACME01");
        assert_eq!(config.number_of_header_rows, 1);
        let map = config.source_column_map.expect("column map");
        assert_eq!(map.account_number, Some(2));
        assert_eq!(map.vin, Some(9));
        assert_eq!(map.date_of_repo, Some(14));
        assert_eq!(map.loan_balance, None);
    }

    #[test]
    fn sample_round_trips() {
        let sample = ClientConfig::sample();
        sample.validate().expect("sample is valid");
        let json = serde_json::to_string(&sample).expect("serialize sample");
        assert!(json.contains("\"RsaClientId\""));
        let round: ClientConfig = serde_json::from_str(&json).expect("deserialize sample");
        assert_eq!(round.rsa_client_id, sample.rsa_client_id);
        let map = round.source_column_map.expect("column map");
        assert_eq!(map.date_of_clear, Some(15));
    }
}
