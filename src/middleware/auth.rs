//! Shared-secret access gate.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the password from the Authorization header
//! 2. Hash it and compare it with the configured password's digest
//! 3. Inject an `AccessGrant` into the request
//! 4. Reject everything else with HTTP 401
//!
//! The gate keeps casual visitors out; it is not a security boundary.

use crate::{error::AppError, state::AppState, state::sha256_hex};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying a caller-chosen session id.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Per-request proof that the password check passed.
///
/// Handlers take this as an `Extension<AccessGrant>` parameter; there is no
/// process-wide "authenticated" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGrant {
    /// From `X-Session-Id` when it is a valid UUID, otherwise freshly generated.
    /// Only used to correlate log lines.
    pub session_id: Uuid,
}

/// Access gate middleware function.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer <password>
/// X-Session-Id: 550e8400-e29b-41d4-a716-446655440000   (optional)
/// ```
///
/// # Returns
///
/// - `Ok(Response)` from the next handler when the password matches
/// - `Err(AppError::InvalidPassword)` otherwise (401)
pub async fn password_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidPassword)?;

    let password = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidPassword)?;

    if sha256_hex(password) != *state.password_digest {
        tracing::warn!("Rejected request with incorrect password");
        return Err(AppError::InvalidPassword);
    }

    let session_id = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or_else(Uuid::new_v4);

    // Route handlers extract this with Extension<AccessGrant>
    request.extensions_mut().insert(AccessGrant { session_id });

    Ok(next.run(request).await)
}
