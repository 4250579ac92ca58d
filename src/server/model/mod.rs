//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//!
//! It is also the mapping layer between transfer objects and entities:
//! - `from_entity` / `into_dto` copy fields one-for-one without defaulting
//! - `Create*Param::from(dto)` fills absent optional fields with their declared defaults
//! - `Update*Param::apply_to` merges only the fields present on the request

pub mod additional_service;
pub mod excursion;
pub mod hotel;
pub mod room;

/// Description stored when a created resource omits one.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Enabled flag stored when a created service or excursion omits one.
pub const DEFAULT_ENABLED: bool = true;
