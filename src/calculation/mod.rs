//! Retirement age calculation: delay, reformed age, dates and contribution minimums

mod contribution;
mod engine;
mod result;
mod schedule;

pub use contribution::{
    minimum_contribution, ContributionRequirement, BASE_CONTRIBUTION_YEARS,
    CONTRIBUTION_REFORM_YEAR, MAX_ADDED_MONTHS, MONTHS_ADDED_PER_YEAR,
};
pub use engine::{
    compute, compute_profile, compute_with_trace, delay_for_birth, reformed_age,
    retirement_date, DelayOutcome, RetirementAge, LATE_RETIREMENT_WINDOW_YEARS,
};
pub use result::{CalculationTrace, ContributionPhase, DelayBranch, RetirementResult};
pub use schedule::{age_bands, schedule, AgeBand, ScheduleRow};
