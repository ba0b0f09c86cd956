//! The typed remarketing record produced from one worksheet row.

use chrono::NaiveDate;

/// One converted remarketing assignment, in worksheet order.
///
/// Constructed once per qualifying source row and immutable afterwards.
/// Fields with no configured source column hold their type default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemarketingRecord {
    pub account_number: String,
    pub loan_number: String,
    pub last_name: String,
    pub first_name: String,
    pub balance: f64,
    pub year: String,
    pub make: String,
    pub model: String,
    pub vin: String,
    pub mileage: i64,
    pub repo_agent_name: String,
    pub repo_agents_lookup: String,
    pub location_of_unit: String,
    pub date_of_repo: NaiveDate,
    pub date_of_clear: NaiveDate,
}

impl RemarketingRecord {
    /// First and last name joined with a single space, even when either side
    /// is empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let record = RemarketingRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..RemarketingRecord::default()
        };
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn full_name_keeps_space_when_a_side_is_empty() {
        let record = RemarketingRecord {
            last_name: "Lovelace".to_string(),
            ..RemarketingRecord::default()
        };
        assert_eq!(record.full_name(), " Lovelace");

        let record = RemarketingRecord {
            first_name: "Ada".to_string(),
            ..RemarketingRecord::default()
        };
        assert_eq!(record.full_name(), "Ada ");
    }
}
