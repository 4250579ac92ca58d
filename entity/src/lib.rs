//! SeaORM entity models for the hotel schema.
//!
//! Every child table (`room`, `additional_service`, `excursion`) references its
//! owning `hotel` through `hotel_id` with cascading deletes. Room tags live in
//! the `room_tag` join table keyed by `(room_id, tag)`.

pub mod prelude;

pub mod additional_service;
pub mod excursion;
pub mod hotel;
pub mod room;
pub mod room_tag;
