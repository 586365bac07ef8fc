//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use crate::workbook::WorkbookError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failures of the underwriting arithmetic.
///
/// The formulas have a handful of divisors that the inputs can drive to zero
/// (loan term, equity, purchase price). Those are reported here instead of
/// letting NaN or infinity reach the template.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnderwritingError {
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Non-finite result for {metric}")]
    NonFiniteResult { metric: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Access Errors**: Missing or wrong password
/// - **Input Errors**: Missing upload, malformed form fields, unreadable spreadsheet
/// - **Calculation Errors**: Division by zero and other degenerate inputs
/// - **Template Errors**: Template missing or unreadable on the server
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Password missing or wrong.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Incorrect or missing password")]
    InvalidPassword,

    /// No rent roll file in the request.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Please upload a rent roll file.")]
    MissingRentRoll,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),

    /// The multipart body could not be read.
    ///
    /// Carries its own status: 413 when the body exceeds the upload limit,
    /// 400 for malformed bodies.
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    /// The inputs cannot be underwritten.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error(transparent)]
    Underwriting(#[from] UnderwritingError),

    /// Spreadsheet reading or writing failed.
    ///
    /// Upload problems return 400, template problems return 500.
    #[error(transparent)]
    Workbook(#[from] WorkbookError),

    /// Anything else (e.g. a blocking worker panicked).
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidPassword` → 401 Unauthorized
/// - `MissingRentRoll`, `InvalidRequest`, unreadable upload, malformed form → 400 Bad Request
/// - `Multipart` over the upload limit → 413 Payload Too Large
/// - `Underwriting` → 422 Unprocessable Entity
/// - template failures, `Internal` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                "invalid_password",
                self.to_string(),
            ),
            AppError::MissingRentRoll => (
                StatusCode::BAD_REQUEST,
                "missing_rent_roll",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Multipart(ref err) => {
                let status = err.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "payload_too_large"
                } else {
                    "invalid_request"
                };
                (status, code, err.to_string())
            }
            AppError::Underwriting(ref err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "underwriting_error",
                err.to_string(),
            ),
            AppError::Workbook(ref err) if err.is_upload_error() => (
                StatusCode::BAD_REQUEST,
                "unreadable_rent_roll",
                err.to_string(),
            ),
            AppError::Workbook(ref err) => {
                tracing::error!(error = %err, "Template processing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Internal(ref msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
