//! Room factory for creating test room entities and their tags.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db, hotel.id)
///     .number(101)
///     .available(false)
///     .tag("sea-view")
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: Uuid,
    number: i32,
    description: String,
    capacity: i32,
    price: f64,
    available: bool,
    tags: Vec<String>,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - number: unique auto-incremented value above any number tests pick by hand
    /// - description, capacity, price: fixture defaults
    /// - available: `true`
    /// - tags: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hotel_id` - Hotel the room belongs to
    pub fn new(db: &'a DatabaseConnection, hotel_id: Uuid) -> Self {
        Self {
            db,
            hotel_id,
            number: 1_000_000 + next_id() as i32,
            description: fixture::room::DEFAULT_DESCRIPTION.to_string(),
            capacity: fixture::room::DEFAULT_CAPACITY,
            price: fixture::room::DEFAULT_PRICE,
            available: true,
            tags: Vec::new(),
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Adds a tag inserted alongside the room.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builds and inserts the room entity and its tag rows into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let room = entity::room::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            hotel_id: ActiveValue::Set(self.hotel_id),
            number: ActiveValue::Set(self.number),
            description: ActiveValue::Set(self.description),
            capacity: ActiveValue::Set(self.capacity),
            price: ActiveValue::Set(self.price),
            available: ActiveValue::Set(self.available),
        }
        .insert(self.db)
        .await?;

        for tag in self.tags {
            entity::room_tag::ActiveModel {
                room_id: ActiveValue::Set(room.id),
                tag: ActiveValue::Set(tag),
            }
            .insert(self.db)
            .await?;
        }

        Ok(room)
    }
}

/// Creates a room with default values in the given hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: Uuid,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
