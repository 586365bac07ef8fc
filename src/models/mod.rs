//! Data models for the underwriting calculator.
//!
//! Nothing here is persisted; every value lives for a single request.

/// Uploaded rent roll table
pub mod rent_roll;
/// Underwriting inputs and computed metrics
pub mod underwriting;
