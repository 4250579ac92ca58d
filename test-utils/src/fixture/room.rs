//! Room fixtures for creating in-memory test data.

use entity::{room, room_tag};
use uuid::Uuid;

/// Default room number.
pub const DEFAULT_NUMBER: i32 = 101;

/// Default room description.
pub const DEFAULT_DESCRIPTION: &str = "Double room with a view of the courtyard";

/// Default number of guests.
pub const DEFAULT_CAPACITY: i32 = 2;

/// Default nightly price.
pub const DEFAULT_PRICE: f64 = 120.0;

/// Creates a room entity model with default values.
///
/// # Default Values
/// - id / hotel_id: fresh random identifiers
/// - number: `101`
/// - capacity: `2`
/// - price: `120.0`
/// - available: `true`
pub fn entity() -> room::Model {
    room::Model {
        id: Uuid::new_v4(),
        hotel_id: Uuid::new_v4(),
        number: DEFAULT_NUMBER,
        description: DEFAULT_DESCRIPTION.to_string(),
        capacity: DEFAULT_CAPACITY,
        price: DEFAULT_PRICE,
        available: true,
    }
}

/// Creates a tag row for the given room.
pub fn tag(room_id: Uuid, tag: &str) -> room_tag::Model {
    room_tag::Model {
        room_id,
        tag: tag.to_string(),
    }
}
