use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use sg_shared::ApiResponse;

/// Build an enveloped response whose `status` field matches the HTTP status
pub fn respond<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: Option<T>,
    errors: Vec<String>,
) -> HttpResponse {
    let body = ApiResponse {
        message: message.to_string(),
        data,
        errors,
        status: status.canonical_reason().unwrap_or_default().to_string(),
    };
    HttpResponse::build(status).json(body)
}

/// Success response
pub fn envelope<T: Serialize>(status: StatusCode, message: &str, data: Option<T>) -> HttpResponse {
    respond(status, message, data, Vec::new())
}

/// Error response without data
pub fn error_envelope(status: StatusCode, message: &str, errors: Vec<String>) -> HttpResponse {
    respond::<()>(status, message, None, errors)
}
