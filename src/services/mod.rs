//! Business logic services.
//!
//! The calculation modules are plain functions over numbers; the underwriting
//! service ties them to the uploaded workbook and the template.

pub mod amortization;
pub mod expenses;
pub mod rent_roll;
pub mod returns;
pub mod underwriting_service;
