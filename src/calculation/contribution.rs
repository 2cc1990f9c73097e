//! Minimum pension contribution schedule

use super::result::ContributionPhase;

/// Minimum contribution before the reform phases in
pub const BASE_CONTRIBUTION_YEARS: u32 = 15;

/// First retirement year with a raised minimum
pub const CONTRIBUTION_REFORM_YEAR: i32 = 2030;

/// Months added per retirement year from the reform year on
pub const MONTHS_ADDED_PER_YEAR: u32 = 6;

/// Cap on added months (5 years)
pub const MAX_ADDED_MONTHS: u32 = 60;

/// Minimum contribution required at retirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionRequirement {
    pub years: u32,
    pub extra_months: u32,
}

/// Minimum contribution for a given retirement year.
///
/// The reform year itself counts as the first year of the phase-in.
pub fn minimum_contribution(retirement_year: i32) -> (ContributionRequirement, ContributionPhase) {
    if retirement_year < CONTRIBUTION_REFORM_YEAR {
        let requirement = ContributionRequirement {
            years: BASE_CONTRIBUTION_YEARS,
            extra_months: 0,
        };
        return (requirement, ContributionPhase::Baseline);
    }

    let years_after_reform = (retirement_year - CONTRIBUTION_REFORM_YEAR) as u32 + 1;
    let uncapped = years_after_reform.saturating_mul(MONTHS_ADDED_PER_YEAR);
    let added_months = uncapped.min(MAX_ADDED_MONTHS);

    let requirement = ContributionRequirement {
        years: BASE_CONTRIBUTION_YEARS + added_months / 12,
        extra_months: added_months % 12,
    };
    let phase = ContributionPhase::PhasedIn {
        years_after_reform,
        added_months,
        capped: uncapped > MAX_ADDED_MONTHS,
    };
    (requirement, phase)
}
