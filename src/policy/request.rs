//! Raw calculation requests and their validated form

use serde::{Deserialize, Serialize};

use super::{WorkerCategory, YearMonth};
use crate::error::Result;

/// Unvalidated request as submitted by the form, a CSV row or the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Birth year-month as `YYYY-MM`
    #[serde(rename = "birthDate", alias = "BirthDate")]
    pub birth_date: String,

    /// Category selector (`male`, `female55`, `female50`)
    #[serde(rename = "personType", alias = "PersonType")]
    pub person_type: String,
}

impl CalculationRequest {
    pub fn new(birth_date: impl Into<String>, person_type: impl Into<String>) -> Self {
        Self {
            birth_date: birth_date.into(),
            person_type: person_type.into(),
        }
    }

    /// Check the birth date and category selector.
    ///
    /// The date is checked first, so a request wrong on both counts reports
    /// the date error.
    pub fn validate(&self) -> Result<BirthProfile> {
        let birth = YearMonth::parse_birth_date(&self.birth_date)?;
        let category = self.person_type.parse::<WorkerCategory>()?;
        Ok(BirthProfile { birth, category })
    }
}

/// Validated engine input; only built by `validate` or from typed values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthProfile {
    pub birth: YearMonth,
    pub category: WorkerCategory,
}

impl BirthProfile {
    pub fn new(birth: YearMonth, category: WorkerCategory) -> Self {
        Self { birth, category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    #[test]
    fn test_validate_ok() {
        let profile = CalculationRequest::new("1975-06", "female50").validate().unwrap();
        assert_eq!(profile.birth, YearMonth::new(1975, 6));
        assert_eq!(profile.category, WorkerCategory::FemaleAge50);
    }

    #[test]
    fn test_validate_date_checked_first() {
        let err = CalculationRequest::new("75-6", "robot").validate().unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidDateFormat(_)));

        let err = CalculationRequest::new("1975-06", "robot").validate().unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownCategory(_)));
    }

    #[test]
    fn test_profile_rejects_out_of_calendar_months() {
        for birth_date in ["1980-00", "1980-13", "0999-05", " 1980-05"] {
            let err = CalculationRequest::new(birth_date, "male").validate().unwrap_err();
            assert!(matches!(err, CalculatorError::InvalidDateFormat(_)), "{birth_date:?}");
        }
    }

    #[test]
    fn test_json_field_names() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"birthDate":"1964-06","personType":"male"}"#).unwrap();
        assert_eq!(request, CalculationRequest::new("1964-06", "male"));
    }
}
