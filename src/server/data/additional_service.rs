//! Additional service data repository for database operations.
//!
//! Provides the `AdditionalServiceRepository` for managing the additional services a
//! hotel offers. Services are located within their hotel by name.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::additional_service::{AdditionalService, CreateAdditionalServiceParam};

/// Repository providing database operations for additional service management.
pub struct AdditionalServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdditionalServiceRepository<'a> {
    /// Creates a new AdditionalServiceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdditionalServiceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new additional service for a hotel.
    ///
    /// # Arguments
    /// - `id` - Freshly generated service identifier
    /// - `hotel_id` - Identifier of the owning hotel
    /// - `param` - Creation parameters with defaults already applied
    ///
    /// # Returns
    /// - `Ok(AdditionalService)` - The created service
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        id: Uuid,
        hotel_id: Uuid,
        param: CreateAdditionalServiceParam,
    ) -> Result<AdditionalService, DbErr> {
        let entity = entity::additional_service::ActiveModel {
            id: ActiveValue::Set(id),
            hotel_id: ActiveValue::Set(hotel_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            enabled: ActiveValue::Set(param.enabled),
        }
        .insert(self.db)
        .await?;

        Ok(AdditionalService::from_entity(entity))
    }

    /// Finds an additional service by name within a hotel.
    ///
    /// # Returns
    /// - `Ok(Some(AdditionalService))` - Service found
    /// - `Ok(None)` - The hotel has no service with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_hotel_id_and_name(
        &self,
        hotel_id: Uuid,
        name: &str,
    ) -> Result<Option<AdditionalService>, DbErr> {
        let entity = entity::prelude::AdditionalService::find()
            .filter(entity::additional_service::Column::HotelId.eq(hotel_id))
            .filter(entity::additional_service::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(AdditionalService::from_entity))
    }

    /// Gets all additional services of a hotel ordered by name.
    pub async fn find_by_hotel_id(&self, hotel_id: Uuid) -> Result<Vec<AdditionalService>, DbErr> {
        let entities = entity::prelude::AdditionalService::find()
            .filter(entity::additional_service::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::additional_service::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(AdditionalService::from_entity)
            .collect())
    }

    /// Saves an existing additional service in place.
    ///
    /// # Returns
    /// - `Ok(AdditionalService)` - The saved service as stored
    /// - `Err(DbErr)` - Database error during update
    pub async fn save(&self, service: AdditionalService) -> Result<AdditionalService, DbErr> {
        let entity = entity::additional_service::ActiveModel {
            id: ActiveValue::Unchanged(service.id),
            hotel_id: ActiveValue::Set(service.hotel_id),
            name: ActiveValue::Set(service.name),
            description: ActiveValue::Set(service.description),
            enabled: ActiveValue::Set(service.enabled),
        }
        .update(self.db)
        .await?;

        Ok(AdditionalService::from_entity(entity))
    }

    /// Deletes an additional service by ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::AdditionalService::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
