//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (multipart form, extensions, state)
//! 2. Hands the work to a service
//! 3. Returns an HTTP response (file download or JSON)

/// Service health endpoint
pub mod health;
/// Underwriting endpoints
pub mod underwriting;
