//! Output structures for retirement calculations

use serde::{Deserialize, Serialize};

use crate::policy::{WorkerCategory, YearMonth};

/// Reformed statutory retirement age for one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementResult {
    // Reformed retirement age
    pub age_years: u32,
    pub age_months: u32,

    // Calendar month the reformed age is reached
    pub retirement_year: i32,
    pub retirement_month: u32,

    /// Months added to the original statutory age
    pub delay_months: u32,

    // Minimum pension contribution as of the retirement year
    pub minimum_contribution_years: u32,
    pub minimum_contribution_extra_months: u32,

    // Earliest voluntary retirement (original age)
    pub early_retirement_year: i32,
    pub early_retirement_month: u32,

    // Latest voluntary retirement (reformed date + 3 years)
    pub late_retirement_year: i32,
    pub late_retirement_month: u32,
}

impl RetirementResult {
    pub fn retirement_date(&self) -> YearMonth {
        YearMonth::new(self.retirement_year, self.retirement_month)
    }

    pub fn early_retirement(&self) -> YearMonth {
        YearMonth::new(self.early_retirement_year, self.early_retirement_month)
    }

    pub fn late_retirement(&self) -> YearMonth {
        YearMonth::new(self.late_retirement_year, self.late_retirement_month)
    }

    /// Reformed age expressed in months
    pub fn age_in_months(&self) -> u32 {
        self.age_years * 12 + self.age_months
    }

    /// Minimum contribution expressed in months
    pub fn minimum_contribution_months(&self) -> u32 {
        self.minimum_contribution_years * 12 + self.minimum_contribution_extra_months
    }
}

/// How the delay was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "branch", rename_all = "camelCase")]
pub enum DelayBranch {
    /// Born before January of the threshold year; original age applies
    BeforeThreshold,
    /// Born on or after the threshold; delay accrues per step.
    /// Both counts saturate at `u32::MAX`.
    #[serde(rename_all = "camelCase")]
    PhasedIn {
        elapsed_months: u32,
        uncapped_delay_months: u32,
        capped: bool,
    },
}

/// How the minimum contribution was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum ContributionPhase {
    /// Retirement before the contribution reform year
    Baseline,
    /// Retirement in or after the reform year
    #[serde(rename_all = "camelCase")]
    PhasedIn {
        years_after_reform: u32,
        added_months: u32,
        capped: bool,
    },
}

/// Explanation of a calculation, for audit logs and API consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationTrace {
    pub category: WorkerCategory,
    pub birth: YearMonth,
    pub base_age_years: u32,
    pub delay: DelayBranch,
    pub contribution: ContributionPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RetirementResult {
        RetirementResult {
            age_years: 60,
            age_months: 1,
            retirement_year: 2025,
            retirement_month: 2,
            delay_months: 1,
            minimum_contribution_years: 15,
            minimum_contribution_extra_months: 0,
            early_retirement_year: 2025,
            early_retirement_month: 1,
            late_retirement_year: 2028,
            late_retirement_month: 2,
        }
    }

    #[test]
    fn test_accessors() {
        let result = sample();
        assert_eq!(result.retirement_date(), YearMonth::new(2025, 2));
        assert_eq!(result.early_retirement(), YearMonth::new(2025, 1));
        assert_eq!(result.late_retirement(), YearMonth::new(2028, 2));
        assert_eq!(result.age_in_months(), 721);
        assert_eq!(result.minimum_contribution_months(), 180);
    }

    #[test]
    fn test_trace_serialization_tags() {
        let trace = CalculationTrace {
            category: WorkerCategory::MaleStandard,
            birth: YearMonth::new(1965, 1),
            base_age_years: 60,
            delay: DelayBranch::PhasedIn {
                elapsed_months: 0,
                uncapped_delay_months: 1,
                capped: false,
            },
            contribution: ContributionPhase::Baseline,
        };
        let json = serde_json::to_value(trace).unwrap();
        assert_eq!(json["category"], "male");
        assert_eq!(json["baseAgeYears"], 60);
        assert_eq!(json["delay"]["branch"], "phasedIn");
        assert_eq!(json["delay"]["uncappedDelayMonths"], 1);
        assert_eq!(json["contribution"]["phase"], "baseline");
        assert!(json.get("base_age_years").is_none());
    }

    #[test]
    fn test_result_fields_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["ageYears"], 60);
        assert_eq!(json["retirementMonth"], 2);
        assert_eq!(json["minimumContributionExtraMonths"], 0);
        assert_eq!(json["lateRetirementYear"], 2028);
        assert!(json.get("retirement_month").is_none());
    }
}
