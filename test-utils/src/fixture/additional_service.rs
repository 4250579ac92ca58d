//! Additional service fixtures for creating in-memory test data.

use entity::additional_service;
use uuid::Uuid;

/// Default additional service name.
pub const DEFAULT_NAME: &str = "Spa";

/// Default additional service description.
pub const DEFAULT_DESCRIPTION: &str = "Sauna and pool access";

/// Creates an enabled additional service entity model named `"Spa"`.
pub fn entity() -> additional_service::Model {
    additional_service::Model {
        id: Uuid::new_v4(),
        hotel_id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        enabled: true,
    }
}
