//! JSON request/response bodies for the calculation endpoint

use serde::Serialize;
use std::collections::BTreeMap;

use crate::calculation::{CalculationTrace, RetirementResult};
use crate::policy::WorkerCategory;

/// Response body of `POST /api/calculate`.
///
/// The flat display fields are what the form renders; `result` carries the
/// same numbers in structured form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub person_type: WorkerCategory,
    pub retirement_age_years: u32,
    pub retirement_age_months: u32,
    pub retirement_date: String,
    pub delay_months: u32,
    pub minimum_contribution_years: String,
    pub early_retirement: String,
    pub late_retirement: String,
    pub result: RetirementResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<CalculationTrace>,
}

impl CalculateResponse {
    pub fn new(
        category: WorkerCategory,
        result: RetirementResult,
        trace: Option<CalculationTrace>,
    ) -> Self {
        Self {
            person_type: category,
            retirement_age_years: result.age_years,
            retirement_age_months: result.age_months,
            retirement_date: result.retirement_date().to_string(),
            delay_months: result.delay_months,
            minimum_contribution_years: format_contribution(&result),
            early_retirement: result.early_retirement().to_string(),
            late_retirement: result.late_retirement().to_string(),
            result,
            trace,
        }
    }
}

/// `"{years}年 {months}个月"`
pub fn format_contribution(result: &RetirementResult) -> String {
    format!(
        "{}年 {}个月",
        result.minimum_contribution_years, result.minimum_contribution_extra_months
    )
}

/// One entry of `GET /api/categories`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub value: WorkerCategory,
    pub label: &'static str,
    pub base_age_years: u32,
    pub threshold_year: i32,
    pub delay_step_months: u32,
    pub max_delay_months: u32,
}

impl From<WorkerCategory> for CategoryInfo {
    fn from(category: WorkerCategory) -> Self {
        let params = category.parameters();
        Self {
            value: category,
            label: category.label(),
            base_age_years: params.base_age_years,
            threshold_year: params.threshold_year,
            delay_step_months: params.delay_step_months,
            max_delay_months: params.max_delay_months,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP response in the shape Lambda Function URLs expect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl HttpResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    pub fn json_body(mut self, body: String) -> Self {
        self.body = body;
        self.header("Content-Type", "application/json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;

    #[test]
    fn test_response_fields() {
        let result = compute(1975, 6, WorkerCategory::FemaleAge50);
        let response = CalculateResponse::new(WorkerCategory::FemaleAge50, result, None);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["personType"], "female50");
        assert_eq!(json["retirementAgeYears"], 50);
        assert_eq!(json["retirementAgeMonths"], 3);
        assert_eq!(json["retirementDate"], "2025-9");
        assert_eq!(json["delayMonths"], 3);
        assert_eq!(json["minimumContributionYears"], "15年 0个月");
        assert_eq!(json["earlyRetirement"], "2025-6");
        assert_eq!(json["lateRetirement"], "2028-9");
        assert_eq!(json["result"]["retirementMonth"], 9);
        assert_eq!(json["result"]["delayMonths"], 3);
        assert!(json.get("trace").is_none());
    }

    #[test]
    fn test_contribution_shows_extra_months() {
        let result = compute(1969, 9, WorkerCategory::MaleStandard);
        assert_eq!(format_contribution(&result), "15年 6个月");
    }

    #[test]
    fn test_category_info() {
        let info = CategoryInfo::from(WorkerCategory::FemaleAge55);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["value"], "female55");
        assert_eq!(json["baseAgeYears"], 55);
        assert_eq!(json["maxDelayMonths"], 36);
    }

    #[test]
    fn test_http_response_shape() {
        let response = HttpResponse::new(200).json_body("{}".into());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["headers"]["Content-Type"], "application/json");
        assert_eq!(json["isBase64Encoded"], false);
    }
}
