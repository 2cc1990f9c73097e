//! Core retirement policy engine
//!
//! A single parametrized path serves all worker categories. Each step is a
//! pure function of the previous one:
//! delay -> reformed age -> retirement date -> minimum contribution.

use crate::policy::{BirthProfile, PolicyParameters, WorkerCategory, YearMonth};
use super::contribution::minimum_contribution;
use super::result::{CalculationTrace, DelayBranch, RetirementResult};

/// Years past the reformed date a worker may voluntarily defer retirement
pub const LATE_RETIREMENT_WINDOW_YEARS: u32 = 3;

/// Delay applied for a birth month, with the branch that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayOutcome {
    pub delay_months: u32,
    pub branch: DelayBranch,
}

/// Reformed retirement age as whole years plus 0-11 months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetirementAge {
    pub years: u32,
    pub months: u32,
}

/// Months of delay for a worker born in `birth`.
///
/// One month accrues per `delay_step_months` born after January of the
/// threshold year, with the threshold month itself already counting.
pub fn delay_for_birth(params: &PolicyParameters, birth: YearMonth) -> DelayOutcome {
    if birth.year < params.threshold_year {
        return DelayOutcome {
            delay_months: 0,
            branch: DelayBranch::BeforeThreshold,
        };
    }

    // Non-negative: the year is at or past the threshold. Far-future births
    // saturate at u32::MAX, which is well past every cap.
    let elapsed = birth.months_since_january(params.threshold_year);
    let uncapped = elapsed / i64::from(params.delay_step_months) + 1;
    let elapsed_months = u32::try_from(elapsed).unwrap_or(u32::MAX);
    let uncapped_delay_months = u32::try_from(uncapped).unwrap_or(u32::MAX);
    let delay_months = uncapped_delay_months.min(params.max_delay_months);

    DelayOutcome {
        delay_months,
        branch: DelayBranch::PhasedIn {
            elapsed_months,
            uncapped_delay_months,
            capped: uncapped_delay_months > params.max_delay_months,
        },
    }
}

/// Original age plus the delay, decomposed into years and months
pub fn reformed_age(params: &PolicyParameters, delay_months: u32) -> RetirementAge {
    RetirementAge {
        years: params.base_age_years + delay_months / 12,
        months: delay_months % 12,
    }
}

/// Calendar month in which `age` is reached.
///
/// `age.months` never exceeds 11, so at most one year carry happens.
/// Years saturate at `i32::MAX`.
pub fn retirement_date(birth: YearMonth, age: RetirementAge) -> YearMonth {
    let year = birth.year.saturating_add(age.years as i32);
    let month = birth.month + age.months;
    if month > 12 {
        YearMonth::new(year.saturating_add(1), month - 12)
    } else {
        YearMonth::new(year, month)
    }
}

/// Compute the retirement result for a birth year, month and category.
///
/// Total over every year and months 1-12; callers validate before calling.
/// Delay stays capped for arbitrarily late births, and derived years
/// saturate at `i32::MAX` instead of overflowing.
pub fn compute(birth_year: i32, birth_month: u32, category: WorkerCategory) -> RetirementResult {
    let profile = BirthProfile::new(YearMonth::new(birth_year, birth_month), category);
    compute_with_trace(&profile).0
}

/// Compute the result for a validated profile
pub fn compute_profile(profile: &BirthProfile) -> RetirementResult {
    compute_with_trace(profile).0
}

/// Compute the result together with an explanation of each decision
pub fn compute_with_trace(profile: &BirthProfile) -> (RetirementResult, CalculationTrace) {
    let params = profile.category.parameters();
    let birth = profile.birth;

    let delay = delay_for_birth(&params, birth);
    let age = reformed_age(&params, delay.delay_months);
    let retirement = retirement_date(birth, age);
    let (contribution, contribution_phase) = minimum_contribution(retirement.year);
    let early = birth.plus_years(params.base_age_years);
    let late = retirement.plus_years(LATE_RETIREMENT_WINDOW_YEARS);

    let result = RetirementResult {
        age_years: age.years,
        age_months: age.months,
        retirement_year: retirement.year,
        retirement_month: retirement.month,
        delay_months: delay.delay_months,
        minimum_contribution_years: contribution.years,
        minimum_contribution_extra_months: contribution.extra_months,
        early_retirement_year: early.year,
        early_retirement_month: early.month,
        late_retirement_year: late.year,
        late_retirement_month: late.month,
    };

    let trace = CalculationTrace {
        category: profile.category,
        birth,
        base_age_years: params.base_age_years,
        delay: delay.branch,
        contribution: contribution_phase,
    };

    (result, trace)
}
