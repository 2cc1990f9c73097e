//! Worker categories and the reform parameters attached to each

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// Parameters of the phase-in schedule for one worker category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyParameters {
    /// Original (pre-reform) statutory retirement age in years
    pub base_age_years: u32,

    /// First birth year (from January) affected by the delay
    pub threshold_year: i32,

    /// Months of birth after the threshold per month of delay
    pub delay_step_months: u32,

    /// Maximum total delay in months
    pub max_delay_months: u32,
}

/// Men retiring at 60
pub const MALE_STANDARD: PolicyParameters = PolicyParameters {
    base_age_years: 60,
    threshold_year: 1965,
    delay_step_months: 4,
    max_delay_months: 36,
};

/// Women whose original retirement age is 55
pub const FEMALE_AGE_55: PolicyParameters = PolicyParameters {
    base_age_years: 55,
    threshold_year: 1970,
    delay_step_months: 4,
    max_delay_months: 36,
};

/// Women whose original retirement age is 50
pub const FEMALE_AGE_50: PolicyParameters = PolicyParameters {
    base_age_years: 50,
    threshold_year: 1975,
    delay_step_months: 2,
    max_delay_months: 60,
};

/// Worker category selecting the applicable reform schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerCategory {
    #[serde(rename = "male")]
    MaleStandard,
    #[serde(rename = "female55")]
    FemaleAge55,
    #[serde(rename = "female50")]
    FemaleAge50,
}

impl WorkerCategory {
    pub const ALL: [WorkerCategory; 3] = [
        WorkerCategory::MaleStandard,
        WorkerCategory::FemaleAge55,
        WorkerCategory::FemaleAge50,
    ];

    /// Reform parameters for this category
    pub fn parameters(&self) -> PolicyParameters {
        match self {
            WorkerCategory::MaleStandard => MALE_STANDARD,
            WorkerCategory::FemaleAge55 => FEMALE_AGE_55,
            WorkerCategory::FemaleAge50 => FEMALE_AGE_50,
        }
    }

    /// Selector used by the form and the JSON API
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerCategory::MaleStandard => "male",
            WorkerCategory::FemaleAge55 => "female55",
            WorkerCategory::FemaleAge50 => "female50",
        }
    }

    /// Label shown next to the selector in the form
    pub fn label(&self) -> &'static str {
        match self {
            WorkerCategory::MaleStandard => "男职工",
            WorkerCategory::FemaleAge55 => "原法定退休年龄55周岁的女职工",
            WorkerCategory::FemaleAge50 => "原法定退休年龄50周岁的女职工",
        }
    }
}

impl fmt::Display for WorkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkerCategory {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "male" => Ok(WorkerCategory::MaleStandard),
            "female55" => Ok(WorkerCategory::FemaleAge55),
            "female50" => Ok(WorkerCategory::FemaleAge50),
            other => Err(CalculatorError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_roundtrip() {
        for category in WorkerCategory::ALL {
            assert_eq!(category.as_str().parse::<WorkerCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_selector() {
        let err = "female60".parse::<WorkerCategory>().unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownCategory(ref s) if s == "female60"));
        assert!("".parse::<WorkerCategory>().is_err());
        assert!("Male".parse::<WorkerCategory>().is_err());
    }

    #[test]
    fn test_parameter_table() {
        let male = WorkerCategory::MaleStandard.parameters();
        assert_eq!((male.base_age_years, male.threshold_year), (60, 1965));
        assert_eq!((male.delay_step_months, male.max_delay_months), (4, 36));

        let f55 = WorkerCategory::FemaleAge55.parameters();
        assert_eq!((f55.base_age_years, f55.threshold_year), (55, 1970));
        assert_eq!((f55.delay_step_months, f55.max_delay_months), (4, 36));

        let f50 = WorkerCategory::FemaleAge50.parameters();
        assert_eq!((f50.base_age_years, f50.threshold_year), (50, 1975));
        assert_eq!((f50.delay_step_months, f50.max_delay_months), (2, 60));
    }

    #[test]
    fn test_serde_selectors() {
        let json = serde_json::to_string(&WorkerCategory::FemaleAge55).unwrap();
        assert_eq!(json, "\"female55\"");
        let parsed: WorkerCategory = serde_json::from_str("\"female50\"").unwrap();
        assert_eq!(parsed, WorkerCategory::FemaleAge50);
    }
}
