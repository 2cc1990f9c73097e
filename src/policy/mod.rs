//! Worker categories, reform parameters and calculation inputs

mod category;
mod date;
mod request;
pub mod loader;

pub use category::{
    PolicyParameters, WorkerCategory, FEMALE_AGE_50, FEMALE_AGE_55, MALE_STANDARD,
};
pub use date::{YearMonth, MAX_YEAR, MIN_YEAR};
pub use request::{BirthProfile, CalculationRequest};
pub use loader::{load_requests, load_requests_from_reader};
