//! Hotel fixtures for creating in-memory test data.

use entity::hotel;
use uuid::Uuid;

/// Default test hotel name.
pub const DEFAULT_NAME: &str = "Grand";

/// Creates a hotel entity model named `"Grand"` with a fresh identifier.
pub fn entity() -> hotel::Model {
    hotel::Model {
        id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
    }
}
