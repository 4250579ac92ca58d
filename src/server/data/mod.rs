//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Lookups return `Option` / `Vec` and never decide what a miss means; turning a miss
//! into a not-found error is the service layer's job.

pub mod additional_service;
pub mod excursion;
pub mod hotel;
pub mod room;

#[cfg(test)]
mod test;
