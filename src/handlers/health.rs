//! Health check endpoint for service monitoring.

use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Returns service status and whether the underwriting template is on disk.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// "available" or "missing"
    pub template: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "template": "available",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// A missing template reports `"status": "degraded"`; the endpoint itself
/// still answers 200 so liveness probes keep passing.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let template_present = state.config.template_path.is_file();

    let (status, template) = if template_present {
        ("healthy", "available")
    } else {
        ("degraded", "missing")
    };

    Json(HealthResponse {
        status: status.to_string(),
        template: template.to_string(),
        timestamp: Utc::now(),
    })
}
