//! Conversion of one raw worksheet row into a [`RemarketingRecord`].

use calamine::Data;
use rmk_model::{RemarketingRecord, SourceColumnMap};
use tracing::debug;

use crate::cell::{cell_date, cell_f64, cell_i64, cell_string};

/// Extract a record from one row of raw cell values.
///
/// Returns `None` when the mapped account-number cell resolves to an empty
/// string. That is the end-of-data signal: the caller must stop feeding rows.
/// Every other field is resolved independently, so one bad cell never
/// invalidates the row.
pub fn extract_record(
    cells: &[Data],
    row_idx: usize,
    map: &SourceColumnMap,
) -> Option<RemarketingRecord> {
    let account_number = cell_string(cells, map.account_number, row_idx, "AccountNumber");
    if account_number.is_empty() {
        debug!(
            "encountered empty AccountNumber value at row {row_idx} col {:?}, assuming end of data",
            map.account_number
        );
        return None;
    }

    Some(RemarketingRecord {
        account_number,
        loan_number: cell_string(cells, map.loan_number, row_idx, "LoanNumber"),
        last_name: cell_string(cells, map.last_name, row_idx, "LastName"),
        first_name: cell_string(cells, map.first_name, row_idx, "FirstName"),
        balance: cell_f64(cells, map.loan_balance, row_idx, "Balance"),
        year: cell_string(cells, map.year, row_idx, "Year"),
        make: cell_string(cells, map.make, row_idx, "Make"),
        model: cell_string(cells, map.model, row_idx, "Model"),
        vin: cell_string(cells, map.vin, row_idx, "Vin"),
        mileage: cell_i64(cells, map.mileage, row_idx, "Mileage"),
        repo_agent_name: cell_string(cells, map.repo_agent_name, row_idx, "RepoAgentName"),
        repo_agents_lookup: cell_string(cells, map.repo_agents_lookup, row_idx, "RepoAgentsLookup"),
        location_of_unit: cell_string(cells, map.location_of_unit, row_idx, "LocationOfUnit"),
        date_of_repo: cell_date(cells, map.date_of_repo, row_idx, "DateOfRepo"),
        date_of_clear: cell_date(cells, map.date_of_clear, row_idx, "DateOfClear"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rmk_model::ClientConfig;

    fn full_map() -> SourceColumnMap {
        ClientConfig::sample()
            .source_column_map
            .expect("sample has a column map")
    }

    fn full_row() -> Vec<Data> {
        vec![
            Data::String("ACC-100".to_string()),
            Data::String("LN-7".to_string()),
            Data::String("Lovelace".to_string()),
            Data::String("Ada".to_string()),
            Data::Float(12345.67),
            Data::Float(2021.0),
            Data::String("Ford".to_string()),
            Data::String("F-150".to_string()),
            Data::String("1FTFW1E55MFA00001".to_string()),
            Data::Float(42500.0),
            Data::String("Apex Recovery".to_string()),
            Data::String("APEX".to_string()),
            Data::String("Lot B".to_string()),
            Data::String("6/1/2024".to_string()),
            Data::String("6/15/2024".to_string()),
        ]
    }

    #[test]
    fn empty_account_number_signals_end_of_data() {
        let mut row = full_row();
        row[0] = Data::Empty;
        assert!(extract_record(&row, 3, &full_map()).is_none());

        row[0] = Data::String(String::new());
        assert!(extract_record(&row, 3, &full_map()).is_none());
    }

    #[test]
    fn unmapped_account_number_signals_end_of_data() {
        let map = SourceColumnMap::default();
        assert!(extract_record(&full_row(), 3, &map).is_none());
    }

    #[test]
    fn valid_row_round_trips_every_field() {
        let record = extract_record(&full_row(), 3, &full_map()).expect("record");
        assert_eq!(record.account_number, "ACC-100");
        assert_eq!(record.loan_number, "LN-7");
        assert_eq!(record.last_name, "Lovelace");
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.balance, 12345.67);
        assert_eq!(record.year, "2021");
        assert_eq!(record.make, "Ford");
        assert_eq!(record.model, "F-150");
        assert_eq!(record.vin, "1FTFW1E55MFA00001");
        assert_eq!(record.mileage, 42500);
        assert_eq!(record.repo_agent_name, "Apex Recovery");
        assert_eq!(record.repo_agents_lookup, "APEX");
        assert_eq!(record.location_of_unit, "Lot B");
        assert_eq!(
            record.date_of_repo,
            NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
        );
        assert_eq!(
            record.date_of_clear,
            NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
        );
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn unmapped_fields_default_regardless_of_row_content() {
        let map = SourceColumnMap {
            account_number: Some(1),
            ..SourceColumnMap::default()
        };
        let record = extract_record(&full_row(), 3, &map).expect("record");
        assert_eq!(record.account_number, "ACC-100");
        assert_eq!(record.loan_number, "");
        assert_eq!(record.balance, 0.0);
        assert_eq!(record.mileage, 0);
        assert_eq!(record.date_of_repo, NaiveDate::default());
    }

    #[test]
    fn bad_cell_defaults_without_touching_other_fields() {
        let mut row = full_row();
        row[4] = Data::String("not a number".to_string());
        let record = extract_record(&row, 3, &full_map()).expect("record");
        assert_eq!(record.balance, 0.0);
        // Neighbouring fields still come from their own cells.
        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.year, "2021");
        assert_eq!(record.mileage, 42500);
    }
}
