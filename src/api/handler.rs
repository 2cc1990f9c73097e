//! Transport-independent request handling
//!
//! Routes:
//!   POST    /api/calculate   calculate from `{"birthDate", "personType"}`
//!   GET     /api/categories  list worker categories and their parameters
//!   OPTIONS *                CORS preflight

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{error, warn};
use serde::Serialize;

use super::types::{CalculateResponse, CategoryInfo, ErrorResponse, HttpResponse};
use crate::audit;
use crate::calculation::compute_with_trace;
use crate::config::ServiceConfig;
use crate::policy::{CalculationRequest, WorkerCategory};

pub const CALCULATE_PATH: &str = "/api/calculate";
pub const CATEGORIES_PATH: &str = "/api/categories";

/// Handle one HTTP request
pub fn handle(method: &str, path: &str, body: Option<&str>, config: &ServiceConfig) -> HttpResponse {
    let path = normalize_path(path);

    match (method.to_ascii_uppercase().as_str(), path) {
        ("OPTIONS", _) => with_cors(HttpResponse::new(200), config),
        ("POST", CALCULATE_PATH) | ("POST", "/") => calculate(body, config),
        ("GET", CATEGORIES_PATH) => categories(config),
        (_, CALCULATE_PATH) | (_, CATEGORIES_PATH) | (_, "/") => {
            error_response(405, &format!("method {} not allowed", method), config)
        }
        _ => error_response(404, &format!("no route for {}", path), config),
    }
}

/// Decode a request body that may arrive base64-encoded
pub fn decode_body(
    body: Option<String>,
    is_base64_encoded: bool,
    config: &ServiceConfig,
) -> Result<Option<String>, HttpResponse> {
    match body {
        Some(encoded) if is_base64_encoded => {
            let bytes = STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| error_response(400, &format!("invalid base64 body: {}", e), config))?;
            String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| error_response(400, &format!("body is not UTF-8: {}", e), config))
        }
        other => Ok(other),
    }
}

fn calculate(body: Option<&str>, config: &ServiceConfig) -> HttpResponse {
    let body = body.map(str::trim).filter(|b| !b.is_empty()).unwrap_or("{}");

    let request: CalculationRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!("malformed calculation request: {}", e);
            return error_response(400, &format!("Invalid JSON: {}", e), config);
        }
    };

    let profile = match request.validate() {
        Ok(profile) => profile,
        Err(err) => {
            audit::record_rejection(&request.birth_date, &err);
            return error_response(400, &err.user_message(), config);
        }
    };

    let (result, trace) = compute_with_trace(&profile);
    audit::record_calculation(&trace, &result);

    let trace = config.include_trace.then_some(trace);
    json_response(200, &CalculateResponse::new(profile.category, result, trace), config)
}

fn categories(config: &ServiceConfig) -> HttpResponse {
    let infos: Vec<CategoryInfo> = WorkerCategory::ALL.into_iter().map(CategoryInfo::from).collect();
    json_response(200, &infos, config)
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn with_cors(response: HttpResponse, config: &ServiceConfig) -> HttpResponse {
    response
        .header("Access-Control-Allow-Origin", config.cors_origin.clone())
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T, config: &ServiceConfig) -> HttpResponse {
    match serde_json::to_string(body) {
        Ok(json) => with_cors(HttpResponse::new(status).json_body(json), config),
        Err(e) => {
            error!("failed to serialize response: {}", e);
            error_response(500, "internal error", config)
        }
    }
}

fn error_response(status: u16, message: &str, config: &ServiceConfig) -> HttpResponse {
    let body = ErrorResponse {
        error: message.to_string(),
    };
    // ErrorResponse is a single string field; serialization cannot fail
    let json = serde_json::to_string(&body).unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
    with_cors(HttpResponse::new(status).json_body(json), config)
}
