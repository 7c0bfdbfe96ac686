use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

use crate::domain::order::OrderError;
use crate::store::StoreError;

// ============================================================================
// API Error - Uniform Wire-Level Error Mapping
// ============================================================================
//
// Every failure path serializes as `{"error": "<message>"}`. Domain
// validation maps to 400, missing records to 404, guard denials to 401, and
// backing-store failures to 500. Display strings are the storefront's error
// contract; tests pin the important ones.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password is required")]
    MissingPassword,

    #[error("Invalid status. Use ORDER_RECEIVED, PREPARING, or OUT_FOR_DELIVERY")]
    InvalidStatus,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Order(err) => match err {
                OrderError::NotFound => StatusCode::NOT_FOUND,
                OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Unauthorized | ApiError::InvalidPassword => StatusCode::UNAUTHORIZED,
            ApiError::MissingPassword | ApiError::InvalidStatus => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// JSON extractor configuration that keeps malformed payloads on the same
/// `{"error": ...}` shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
