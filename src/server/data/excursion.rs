//! Excursion data repository for database operations.
//!
//! Provides the `ExcursionRepository` for managing the excursions a hotel offers.
//! Excursions are located within their hotel by name.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::excursion::{CreateExcursionParam, Excursion};

/// Repository providing database operations for excursion management.
pub struct ExcursionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExcursionRepository<'a> {
    /// Creates a new ExcursionRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new excursion for a hotel.
    ///
    /// # Arguments
    /// - `id` - Freshly generated excursion identifier
    /// - `hotel_id` - Identifier of the owning hotel
    /// - `param` - Creation parameters with defaults already applied
    ///
    /// # Returns
    /// - `Ok(Excursion)` - The created excursion
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        id: Uuid,
        hotel_id: Uuid,
        param: CreateExcursionParam,
    ) -> Result<Excursion, DbErr> {
        let entity = entity::excursion::ActiveModel {
            id: ActiveValue::Set(id),
            hotel_id: ActiveValue::Set(hotel_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            enabled: ActiveValue::Set(param.enabled),
        }
        .insert(self.db)
        .await?;

        Ok(Excursion::from_entity(entity))
    }

    /// Finds an excursion by name within a hotel.
    ///
    /// # Returns
    /// - `Ok(Some(Excursion))` - Excursion found
    /// - `Ok(None)` - The hotel has no excursion with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_hotel_id_and_name(
        &self,
        hotel_id: Uuid,
        name: &str,
    ) -> Result<Option<Excursion>, DbErr> {
        let entity = entity::prelude::Excursion::find()
            .filter(entity::excursion::Column::HotelId.eq(hotel_id))
            .filter(entity::excursion::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Excursion::from_entity))
    }

    /// Gets all excursions of a hotel ordered by name.
    pub async fn find_by_hotel_id(&self, hotel_id: Uuid) -> Result<Vec<Excursion>, DbErr> {
        let entities = entity::prelude::Excursion::find()
            .filter(entity::excursion::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::excursion::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Excursion::from_entity).collect())
    }

    /// Saves an existing excursion in place.
    pub async fn save(&self, excursion: Excursion) -> Result<Excursion, DbErr> {
        let entity = entity::excursion::ActiveModel {
            id: ActiveValue::Unchanged(excursion.id),
            hotel_id: ActiveValue::Set(excursion.hotel_id),
            name: ActiveValue::Set(excursion.name),
            description: ActiveValue::Set(excursion.description),
            price: ActiveValue::Set(excursion.price),
            enabled: ActiveValue::Set(excursion.enabled),
        }
        .update(self.db)
        .await?;

        Ok(Excursion::from_entity(entity))
    }

    /// Deletes an excursion by ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Excursion::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
