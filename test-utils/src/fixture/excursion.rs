//! Excursion fixtures for creating in-memory test data.

use entity::excursion;
use uuid::Uuid;

/// Default excursion name.
pub const DEFAULT_NAME: &str = "Old Town Walk";

/// Default excursion description.
pub const DEFAULT_DESCRIPTION: &str = "Guided walk through the old town";

/// Default excursion price.
pub const DEFAULT_PRICE: f64 = 25.0;

/// Creates an enabled excursion entity model named `"Old Town Walk"`.
pub fn entity() -> excursion::Model {
    excursion::Model {
        id: Uuid::new_v4(),
        hotel_id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        price: DEFAULT_PRICE,
        enabled: true,
    }
}
