//! Additional service factory for creating test additional service entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test additional services with customizable fields.
pub struct AdditionalServiceFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: Uuid,
    name: String,
    description: String,
    enabled: bool,
}

impl<'a> AdditionalServiceFactory<'a> {
    /// Creates a new factory named `"Service {id}"`, enabled, with the fixture description.
    pub fn new(db: &'a DatabaseConnection, hotel_id: Uuid) -> Self {
        Self {
            db,
            hotel_id,
            name: format!("Service {}", next_id()),
            description: fixture::additional_service::DEFAULT_DESCRIPTION.to_string(),
            enabled: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the additional service entity into the database.
    pub async fn build(self) -> Result<entity::additional_service::Model, DbErr> {
        entity::additional_service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            enabled: ActiveValue::Set(self.enabled),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an additional service with default values in the given hotel.
pub async fn create_additional_service(
    db: &DatabaseConnection,
    hotel_id: Uuid,
) -> Result<entity::additional_service::Model, DbErr> {
    AdditionalServiceFactory::new(db, hotel_id).build().await
}
