//! Reform schedule tables: results for every birth month in a year range

use serde::Serialize;

use crate::policy::{BirthProfile, WorkerCategory, YearMonth};
use super::engine::compute_profile;
use super::result::RetirementResult;

/// Result for one birth month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub birth: YearMonth,
    pub result: RetirementResult,
}

/// Consecutive birth months sharing the same reformed age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBand {
    pub first_birth: YearMonth,
    pub last_birth: YearMonth,
    pub age_years: u32,
    pub age_months: u32,
    pub delay_months: u32,
}

/// One row per birth month from January `from_year` to December `to_year`.
///
/// Empty when `from_year > to_year`.
pub fn schedule(category: WorkerCategory, from_year: i32, to_year: i32) -> Vec<ScheduleRow> {
    (from_year..=to_year)
        .flat_map(|year| (1..=12).map(move |month| YearMonth::new(year, month)))
        .map(|birth| ScheduleRow {
            birth,
            result: compute_profile(&BirthProfile::new(birth, category)),
        })
        .collect()
}

/// Collapse a schedule into bands of identical reformed age
pub fn age_bands(rows: &[ScheduleRow]) -> Vec<AgeBand> {
    let mut bands: Vec<AgeBand> = Vec::new();

    for row in rows {
        match bands.last_mut() {
            Some(band) if band.delay_months == row.result.delay_months => {
                band.last_birth = row.birth;
            }
            _ => bands.push(AgeBand {
                first_birth: row.birth,
                last_birth: row.birth,
                age_years: row.result.age_years,
                age_months: row.result.age_months,
                delay_months: row.result.delay_months,
            }),
        }
    }

    bands
}
