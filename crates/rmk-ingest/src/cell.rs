//! Typed cell coercion with default-and-log fallback.
//!
//! Each function resolves an optional 1-based column index against one raw
//! worksheet row and coerces the cell to a target type. The shared contract:
//!
//! - no column mapped: return the type default and log the omission at info
//! - cell missing or empty: return the type default silently
//! - coercion failure: log the row, column, raw value, and default at error,
//!   then return the default
//!
//! Coercion never aborts a row; it degrades to the default.

use calamine::{Data, DataType};
use chrono::NaiveDate;
use tracing::{error, info};

/// Date text layouts accepted for date-typed cells.
const DATE_TEXT_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m/%d/%y", "%m-%d-%Y"];

fn cell_at(cells: &[Data], col: u32) -> Option<&Data> {
    // Column indices are configured 1-based but rows are 0-based slices.
    let idx = col.checked_sub(1)? as usize;
    cells.get(idx)
}

fn log_unmapped(field: &str, default: &dyn std::fmt::Display) {
    info!("no source column mapping for field '{field}', using default value '{default}'");
}

fn log_failure(target: &str, row_idx: usize, col: u32, value: &Data, default: &dyn std::fmt::Display) {
    error!(
        "error converting source value to {target}: row {row_idx} column {col} value {value:?}, \
         using default value '{default}'"
    );
}

/// Resolve a string-typed cell.
pub fn cell_string(cells: &[Data], col: Option<u32>, row_idx: usize, field: &str) -> String {
    let default = String::new();
    let Some(col) = col else {
        log_unmapped(field, &default);
        return default;
    };
    let Some(value) = cell_at(cells, col) else {
        return default;
    };
    match try_string(value) {
        Some(text) => text,
        None => {
            log_failure("string", row_idx, col, value, &default);
            default
        }
    }
}

/// Resolve an integer-typed cell.
pub fn cell_i64(cells: &[Data], col: Option<u32>, row_idx: usize, field: &str) -> i64 {
    let default = 0i64;
    let Some(col) = col else {
        log_unmapped(field, &default);
        return default;
    };
    let Some(value) = cell_at(cells, col) else {
        return default;
    };
    if value.is_empty() {
        return default;
    }
    match try_i64(value) {
        Some(number) => number,
        None => {
            log_failure("integer", row_idx, col, value, &default);
            default
        }
    }
}

/// Resolve a decimal-typed cell.
pub fn cell_f64(cells: &[Data], col: Option<u32>, row_idx: usize, field: &str) -> f64 {
    let default = 0f64;
    let Some(col) = col else {
        log_unmapped(field, &default);
        return default;
    };
    let Some(value) = cell_at(cells, col) else {
        return default;
    };
    if value.is_empty() {
        return default;
    }
    match try_f64(value) {
        Some(number) => number,
        None => {
            log_failure("decimal", row_idx, col, value, &default);
            default
        }
    }
}

/// Resolve a date-typed cell.
pub fn cell_date(cells: &[Data], col: Option<u32>, row_idx: usize, field: &str) -> NaiveDate {
    let default = NaiveDate::default();
    let Some(col) = col else {
        log_unmapped(field, &default);
        return default;
    };
    let Some(value) = cell_at(cells, col) else {
        return default;
    };
    if value.is_empty() {
        return default;
    }
    match try_date(value) {
        Some(date) => date,
        None => {
            log_failure("date", row_idx, col, value, &default);
            default
        }
    }
}

fn try_string(value: &Data) -> Option<String> {
    match value {
        Data::Empty => Some(String::new()),
        Data::String(s) => Some(s.clone()),
        // Numeric cells render without a trailing ".0" for whole values.
        Data::Float(f) => Some(format!("{f}")),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(_) => value
            .as_datetime()
            .map(|dt| dt.date().format("%-m/%-d/%Y").to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) => None,
    }
}

fn try_i64(value: &Data) -> Option<i64> {
    match value {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.is_finite() => Some(f.round() as i64),
        Data::String(s) => {
            let text = s.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|f| f.round() as i64))
        }
        Data::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn try_f64(value: &Data) -> Option<f64> {
    match value {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        // Tolerate currency formatting commonly left in balance columns.
        Data::String(s) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse::<f64>()
            .ok(),
        Data::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn try_date(value: &Data) -> Option<NaiveDate> {
    match value {
        // Excel serial datetimes, whether typed as dates or plain numbers.
        Data::DateTime(_) | Data::Float(_) | Data::Int(_) => {
            value.as_datetime().map(|dt| dt.date())
        }
        Data::String(s) => parse_date_text(s),
        Data::DateTimeIso(s) => value
            .as_datetime()
            .map(|dt| dt.date())
            .or_else(|| parse_date_text(s)),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_TEXT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: Vec<Data>) -> Vec<Data> {
        cells
    }

    #[test]
    fn unmapped_column_returns_default() {
        let cells = row(vec![Data::String("ignored".to_string())]);
        assert_eq!(cell_string(&cells, None, 0, "LoanNumber"), "");
        assert_eq!(cell_i64(&cells, None, 0, "Mileage"), 0);
        assert_eq!(cell_f64(&cells, None, 0, "Balance"), 0.0);
        assert_eq!(cell_date(&cells, None, 0, "DateOfRepo"), NaiveDate::default());
    }

    #[test]
    fn missing_or_empty_cell_returns_default() {
        let cells = row(vec![Data::Empty]);
        assert_eq!(cell_string(&cells, Some(1), 0, "Make"), "");
        // Column beyond the row width behaves like an empty cell.
        assert_eq!(cell_i64(&cells, Some(9), 0, "Mileage"), 0);
    }

    #[test]
    fn whole_float_renders_without_decimal_point() {
        let cells = row(vec![Data::Float(100.0)]);
        assert_eq!(cell_string(&cells, Some(1), 0, "AccountNumber"), "100");
    }

    #[test]
    fn integer_coerces_from_float_and_text() {
        let cells = row(vec![
            Data::Float(42_500.6),
            Data::String(" 12000 ".to_string()),
        ]);
        assert_eq!(cell_i64(&cells, Some(1), 0, "Mileage"), 42_501);
        assert_eq!(cell_i64(&cells, Some(2), 0, "Mileage"), 12_000);
    }

    #[test]
    fn decimal_tolerates_currency_text() {
        let cells = row(vec![Data::String("$1,234.50".to_string())]);
        assert_eq!(cell_f64(&cells, Some(1), 0, "Balance"), 1234.5);
    }

    #[test]
    fn bad_numeric_text_falls_back_to_default() {
        let cells = row(vec![Data::String("n/a".to_string())]);
        assert_eq!(cell_f64(&cells, Some(1), 4, "Balance"), 0.0);
        assert_eq!(cell_i64(&cells, Some(1), 4, "Mileage"), 0);
    }

    #[test]
    fn date_parses_common_text_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        for text in ["6/1/2024", "06/01/2024", "2024-06-01", "6/1/24"] {
            let cells = row(vec![Data::String(text.to_string())]);
            assert_eq!(cell_date(&cells, Some(1), 0, "DateOfRepo"), expected, "{text}");
        }
    }

    #[test]
    fn bad_date_text_falls_back_to_default() {
        let cells = row(vec![Data::String("sometime soon".to_string())]);
        assert_eq!(cell_date(&cells, Some(1), 0, "DateOfClear"), NaiveDate::default());
    }
}
