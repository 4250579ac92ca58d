//! Transfer objects exchanged at the API boundary.
//!
//! These types are the external JSON shapes of each resource and are decoupled from
//! both the database entities and the server-side domain models. Responses use the
//! plain `*Dto` types while request bodies use the `Create*Dto` / `Update*Dto`
//! shapes, whose optional fields are filled or merged by the server model layer.

pub mod additional_service;
pub mod api;
pub mod excursion;
pub mod hotel;
pub mod room;
