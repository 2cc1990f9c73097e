//! Retirement Policy - statutory retirement age under the graduated pension reform
//!
//! This library provides:
//! - The policy engine: reformed retirement age, retirement date, delay,
//!   minimum contribution years and the voluntary early/late window
//! - Worker categories with their phase-in parameters
//! - Strict `YYYY-MM` birth date validation
//! - Batch calculation, schedule tables and an HTTP request handler
//! - Audit logging of policy decisions

pub mod api;
pub mod audit;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod policy;

// Re-export commonly used types
pub use calculation::{compute, compute_profile, compute_with_trace, CalculationTrace, RetirementResult};
pub use config::ServiceConfig;
pub use error::{CalculatorError, Result};
pub use policy::{BirthProfile, CalculationRequest, WorkerCategory, YearMonth};
pub use batch::BatchRunner;
