//! Table-driven checks of the reform schedule against known birth months

use retirement_policy::api::{handle, CALCULATE_PATH};
use retirement_policy::batch::{self, BatchRunner};
use retirement_policy::policy::load_requests;
use retirement_policy::{compute, ServiceConfig, WorkerCategory, YearMonth};
use std::io::Write;

struct Case {
    birth: (i32, u32),
    category: WorkerCategory,
    age: (u32, u32),
    retirement: (i32, u32),
    delay: u32,
    contribution: (u32, u32),
}

const CASES: &[Case] = &[
    Case { birth: (1964, 6), category: WorkerCategory::MaleStandard, age: (60, 0), retirement: (2024, 6), delay: 0, contribution: (15, 0) },
    Case { birth: (1965, 1), category: WorkerCategory::MaleStandard, age: (60, 1), retirement: (2025, 2), delay: 1, contribution: (15, 0) },
    Case { birth: (1965, 12), category: WorkerCategory::MaleStandard, age: (60, 3), retirement: (2026, 3), delay: 3, contribution: (15, 0) },
    Case { birth: (1971, 6), category: WorkerCategory::MaleStandard, age: (61, 8), retirement: (2033, 2), delay: 20, contribution: (17, 0) },
    Case { birth: (1976, 9), category: WorkerCategory::MaleStandard, age: (63, 0), retirement: (2039, 9), delay: 36, contribution: (20, 0) },
    Case { birth: (2000, 1), category: WorkerCategory::MaleStandard, age: (63, 0), retirement: (2063, 1), delay: 36, contribution: (20, 0) },
    Case { birth: (1969, 12), category: WorkerCategory::FemaleAge55, age: (55, 0), retirement: (2024, 12), delay: 0, contribution: (15, 0) },
    Case { birth: (1970, 1), category: WorkerCategory::FemaleAge55, age: (55, 1), retirement: (2025, 2), delay: 1, contribution: (15, 0) },
    Case { birth: (1975, 3), category: WorkerCategory::FemaleAge55, age: (56, 4), retirement: (2031, 7), delay: 16, contribution: (16, 0) },
    Case { birth: (1974, 12), category: WorkerCategory::FemaleAge50, age: (50, 0), retirement: (2024, 12), delay: 0, contribution: (15, 0) },
    Case { birth: (1975, 6), category: WorkerCategory::FemaleAge50, age: (50, 3), retirement: (2025, 9), delay: 3, contribution: (15, 0) },
    Case { birth: (1979, 11), category: WorkerCategory::FemaleAge50, age: (52, 6), retirement: (2032, 5), delay: 30, contribution: (16, 6) },
    Case { birth: (1984, 12), category: WorkerCategory::FemaleAge50, age: (55, 0), retirement: (2039, 12), delay: 60, contribution: (20, 0) },
];

#[test]
fn known_birth_months() {
    for case in CASES {
        let (year, month) = case.birth;
        let result = compute(year, month, case.category);
        let label = format!("{}-{} {}", year, month, case.category);

        assert_eq!((result.age_years, result.age_months), case.age, "age for {label}");
        assert_eq!(
            (result.retirement_year, result.retirement_month),
            case.retirement,
            "retirement for {label}"
        );
        assert_eq!(result.delay_months, case.delay, "delay for {label}");
        assert_eq!(
            (result.minimum_contribution_years, result.minimum_contribution_extra_months),
            case.contribution,
            "contribution for {label}"
        );
        assert_eq!(
            result.early_retirement(),
            YearMonth::new(year, month).plus_years(case.category.parameters().base_age_years),
            "early retirement for {label}"
        );
    }
}

#[test]
fn http_matches_engine() {
    let config = ServiceConfig::default();
    for case in CASES {
        let (year, month) = case.birth;
        let body = format!(
            r#"{{"birthDate":"{:04}-{:02}","personType":"{}"}}"#,
            year, month, case.category
        );
        let response = handle("POST", CALCULATE_PATH, Some(&body), &config);
        assert_eq!(response.status_code, 200, "{body}");

        let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(json["retirementDate"], format!("{}-{}", case.retirement.0, case.retirement.1));
        assert_eq!(json["delayMonths"], case.delay);
    }
}

#[test]
fn batch_file_round_trip() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "BirthDate,PersonType").unwrap();
    for case in CASES {
        writeln!(input, "{:04}-{:02},{}", case.birth.0, case.birth.1, case.category).unwrap();
    }
    writeln!(input, "1980-5,male").unwrap();

    let requests = load_requests(input.path()).unwrap();
    let outcomes = BatchRunner::new().run_batch(&requests);
    let summary = batch::summarize(&outcomes);
    assert_eq!(summary.total, CASES.len() + 1);
    assert_eq!(summary.rejected, 1);

    for (case, outcome) in CASES.iter().zip(&outcomes) {
        let result = outcome.result.as_ref().unwrap();
        assert_eq!(result.delay_months, case.delay);
    }

    let mut output = Vec::new();
    batch::write_outcomes(&mut output, &outcomes).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), CASES.len() + 2);
}
