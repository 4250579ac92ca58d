//! Hotel API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the hotel
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models with default values
//! - **factory**: Builders that insert entities into the test database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_room_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let hotel = factory::hotel::create_hotel(db).await?;
//!     let room = factory::room::RoomFactory::new(db, hotel.id).number(101).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
