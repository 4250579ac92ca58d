//! Hotel data repository for database operations.
//!
//! Provides the `HotelRepository` for creating, resolving and deleting hotels. Hotels
//! are resolved by their unique name by every child service before it touches a room,
//! additional service or excursion.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::hotel::{CreateHotelParam, Hotel};

/// Repository providing database operations for hotel management.
pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    /// Creates a new HotelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HotelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new hotel with the provided identifier.
    ///
    /// # Arguments
    /// - `id` - Freshly generated hotel identifier
    /// - `param` - Hotel creation parameters
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel
    /// - `Err(DbErr)` - Database error during insert (including a duplicate name)
    pub async fn create(&self, id: Uuid, param: CreateHotelParam) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Finds a hotel by its unique name.
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - Hotel found
    /// - `Ok(None)` - No hotel with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Gets all hotels ordered by name.
    pub async fn find_all(&self) -> Result<Vec<Hotel>, DbErr> {
        let entities = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    /// Deletes a hotel by ID.
    ///
    /// Rooms, additional services and excursions of the hotel are removed by the
    /// cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(())` - Hotel deleted (or did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Hotel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
