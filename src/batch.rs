//! Batch calculation over many requests
//!
//! Each request is validated and computed independently in parallel; an
//! invalid row is reported in its outcome and never stops the batch.

use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

use crate::audit;
use crate::calculation::{compute_with_trace, RetirementResult};
use crate::error::Result;
use crate::policy::CalculationRequest;

/// Outcome of one batch row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub request: CalculationRequest,
    pub result: std::result::Result<RetirementResult, String>,
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub rejected: usize,
}

/// Runs batches of calculations, optionally writing audit records
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    audit: bool,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log every decision and rejection through the audit module
    pub fn with_audit(mut self, audit: bool) -> Self {
        self.audit = audit;
        self
    }

    /// Calculate one request
    pub fn run_one(&self, request: &CalculationRequest) -> BatchOutcome {
        let result = match request.validate() {
            Ok(profile) => {
                let (result, trace) = compute_with_trace(&profile);
                if self.audit {
                    audit::record_calculation(&trace, &result);
                }
                Ok(result)
            }
            Err(err) => {
                if self.audit {
                    audit::record_rejection(&request.birth_date, &err);
                }
                Err(err.user_message())
            }
        };

        BatchOutcome {
            request: request.clone(),
            result,
        }
    }

    /// Calculate all requests in parallel; outcomes keep input order
    pub fn run_batch(&self, requests: &[CalculationRequest]) -> Vec<BatchOutcome> {
        requests.par_iter().map(|request| self.run_one(request)).collect()
    }
}

/// Summarize a finished batch
pub fn summarize(outcomes: &[BatchOutcome]) -> BatchSummary {
    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    BatchSummary {
        total: outcomes.len(),
        succeeded,
        rejected: outcomes.len() - succeeded,
    }
}

/// CSV output row
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "BirthDate")]
    birth_date: &'a str,
    #[serde(rename = "PersonType")]
    person_type: &'a str,
    #[serde(rename = "AgeYears")]
    age_years: Option<u32>,
    #[serde(rename = "AgeMonths")]
    age_months: Option<u32>,
    #[serde(rename = "RetirementDate")]
    retirement_date: Option<String>,
    #[serde(rename = "DelayMonths")]
    delay_months: Option<u32>,
    #[serde(rename = "MinContributionYears")]
    min_contribution_years: Option<u32>,
    #[serde(rename = "MinContributionMonths")]
    min_contribution_months: Option<u32>,
    #[serde(rename = "EarlyRetirement")]
    early_retirement: Option<String>,
    #[serde(rename = "LateRetirement")]
    late_retirement: Option<String>,
    #[serde(rename = "Error")]
    error: Option<&'a str>,
}

impl<'a> OutputRow<'a> {
    fn from_outcome(outcome: &'a BatchOutcome) -> Self {
        let ok = outcome.result.as_ref().ok();
        Self {
            birth_date: &outcome.request.birth_date,
            person_type: &outcome.request.person_type,
            age_years: ok.map(|r| r.age_years),
            age_months: ok.map(|r| r.age_months),
            retirement_date: ok.map(|r| r.retirement_date().to_string()),
            delay_months: ok.map(|r| r.delay_months),
            min_contribution_years: ok.map(|r| r.minimum_contribution_years),
            min_contribution_months: ok.map(|r| r.minimum_contribution_extra_months),
            early_retirement: ok.map(|r| r.early_retirement().to_string()),
            late_retirement: ok.map(|r| r.late_retirement().to_string()),
            error: outcome.result.as_ref().err().map(|e| e.as_str()),
        }
    }
}

/// Write outcomes as CSV, one row per request
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(OutputRow::from_outcome(outcome))?;
    }
    csv_writer.flush()?;
    Ok(())
}
