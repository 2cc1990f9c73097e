//! HTTP API surface for the calculator

mod handler;
mod types;

pub use handler::{decode_body, handle, CALCULATE_PATH, CATEGORIES_PATH};
pub use types::{
    format_contribution, CalculateResponse, CategoryInfo, ErrorResponse, HttpResponse,
};
