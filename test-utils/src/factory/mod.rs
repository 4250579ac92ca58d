//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert into the
//! database; unique names and numbers come from a shared counter so repeated calls never
//! collide.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let hotel = factory::hotel::create_hotel(&db).await?;
//!
//! let room = factory::room::RoomFactory::new(&db, hotel.id)
//!     .number(101)
//!     .available(false)
//!     .tag("sea-view")
//!     .build()
//!     .await?;
//!
//! let (hotel, room) = factory::helpers::create_room_with_hotel(&db).await?;
//! ```

pub mod additional_service;
pub mod excursion;
pub mod helpers;
pub mod hotel;
pub mod room;

pub use additional_service::create_additional_service;
pub use excursion::create_excursion;
pub use hotel::create_hotel;
pub use room::create_room;
