//! Business logic services.
//!
//! Each service wraps the repositories of one entity family. Every child service runs the
//! same two-phase existence gate before doing anything: the hotel is resolved by name
//! through `HotelService::require`, then the targeted child is resolved within that
//! hotel. A miss at either step returns the matching `HotelApiError` and nothing is
//! modified.

pub mod additional_service;
pub mod excursion;
pub mod hotel;
pub mod room;
