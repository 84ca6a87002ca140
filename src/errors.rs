// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Place not found with id {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    InternalError,
}

/// Convert PlacesError to HTTP response
/// DOCUMENTATION: NotFound answers with an empty body, everything else
/// with a JSON error envelope
impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            PlacesError::NotFound(_) => return HttpResponse::NotFound().finish(),
            PlacesError::DatabaseError(_) => "DATABASE_ERROR",
            PlacesError::InternalError => "INTERNAL_ERROR",
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::NotFound(_) => StatusCode::NOT_FOUND,
            PlacesError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PlacesError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
