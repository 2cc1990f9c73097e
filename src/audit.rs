//! Audit logging of policy decisions
//!
//! The engine never logs; callers pass its trace here once a calculation
//! is done.

use log::{info, warn};
use std::fs::OpenOptions;

use crate::calculation::{CalculationTrace, ContributionPhase, DelayBranch, RetirementResult};
use crate::config::ServiceConfig;
use crate::error::{CalculatorError, Result};

/// Initialize `env_logger`, writing to the configured audit file if any.
///
/// `RUST_LOG` still controls the level (default `info`). Calling this twice
/// leaves the first logger in place.
pub fn init_logging(config: &ServiceConfig) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = &config.audit_log {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
    Ok(())
}

/// Log the decisions behind one calculation
pub fn record_calculation(trace: &CalculationTrace, result: &RetirementResult) {
    info!(
        "calculating retirement age: birth = {}, category = {}",
        trace.birth, trace.category
    );

    match trace.delay {
        DelayBranch::BeforeThreshold => info!(
            "born before threshold, retirement age stays {} years",
            trace.base_age_years
        ),
        DelayBranch::PhasedIn { elapsed_months, uncapped_delay_months, capped } => info!(
            "reformed age {}y{}m, delay {} months (elapsed {}, uncapped {}{})",
            result.age_years,
            result.age_months,
            result.delay_months,
            elapsed_months,
            uncapped_delay_months,
            if capped { ", capped" } else { "" }
        ),
    }

    match trace.contribution {
        ContributionPhase::Baseline => info!(
            "minimum contribution before 2030: {} years",
            result.minimum_contribution_years
        ),
        ContributionPhase::PhasedIn { years_after_reform, added_months, .. } => info!(
            "minimum contribution from 2030: {}y{}m (reform year {}, +{} months)",
            result.minimum_contribution_years,
            result.minimum_contribution_extra_months,
            years_after_reform,
            added_months
        ),
    }

    info!(
        "retirement {}, voluntary window {} to {}",
        result.retirement_date(),
        result.early_retirement(),
        result.late_retirement()
    );
}

/// Log a request rejected before reaching the engine
pub fn record_rejection(input: &str, error: &CalculatorError) {
    warn!("rejected calculation request {:?}: {}", input, error);
}
