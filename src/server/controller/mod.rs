//! HTTP request handlers.
//!
//! Each handler extracts path, query and body values, converts request DTOs into
//! server-side parameters, calls the matching service and converts the resulting domain
//! model back into a DTO. Errors are returned as `AppError` and rendered by its
//! `IntoResponse` implementation.

pub mod additional_service;
pub mod excursion;
pub mod hotel;
pub mod room;
