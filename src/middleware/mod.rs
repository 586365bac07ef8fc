//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Gate access to routes
//! - Attach per-request context for handlers
//! - Short-circuit requests (reject unauthorized)

/// Shared-secret access gate
pub mod auth;
