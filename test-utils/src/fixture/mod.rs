//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and supply the
//! default values used by the factories. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let room = fixture::room::entity();
//! assert_eq!(room.number, fixture::room::DEFAULT_NUMBER);
//! ```

pub mod additional_service;
pub mod excursion;
pub mod hotel;
pub mod room;

pub use additional_service::entity as additional_service_entity;
pub use excursion::entity as excursion_entity;
pub use hotel::entity as hotel_entity;
pub use room::entity as room_entity;
