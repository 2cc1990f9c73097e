//! AWS Lambda handler serving the calculator over HTTP
//!
//! Accepts `{"birthDate": "YYYY-MM", "personType": "male|female55|female50"}`
//! on POST /api/calculate and returns the reformed retirement age as JSON.
//!
//! Supports Lambda Function URLs for direct HTTP access. Configuration comes
//! from RETIREMENT_AUDIT_LOG, RETIREMENT_INCLUDE_TRACE and
//! RETIREMENT_CORS_ORIGIN.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{debug, info};

use retirement_policy::api::{self, HttpResponse};
use retirement_policy::{audit, ServiceConfig};

/// Route one Function URL event through the API handler
fn respond(request: LambdaFunctionUrlRequest, config: &ServiceConfig) -> HttpResponse {
    let method = request
        .request_context
        .http
        .method
        .clone()
        .unwrap_or_else(|| "GET".to_string());
    let path = request
        .raw_path
        .clone()
        .or_else(|| request.request_context.http.path.clone())
        .unwrap_or_else(|| "/".to_string());
    debug!("{} {}", method, path);

    let body = match api::decode_body(request.body, request.is_base64_encoded, config) {
        Ok(body) => body,
        Err(response) => return response,
    };

    api::handle(&method, &path, body.as_deref(), config)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ServiceConfig::from_env();
    audit::init_logging(&config)?;
    info!("retirement calculator starting (trace in responses: {})", config.include_trace);

    run(service_fn(move |event: LambdaEvent<LambdaFunctionUrlRequest>| {
        let response = respond(event.payload, &config);
        async move { Ok::<HttpResponse, Error>(response) }
    }))
    .await
}
