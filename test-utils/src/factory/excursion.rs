//! Excursion factory for creating test excursion entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test excursions with customizable fields.
pub struct ExcursionFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: Uuid,
    name: String,
    description: String,
    price: f64,
    enabled: bool,
}

impl<'a> ExcursionFactory<'a> {
    /// Creates a new factory named `"Excursion {id}"`, enabled, with fixture defaults.
    pub fn new(db: &'a DatabaseConnection, hotel_id: Uuid) -> Self {
        Self {
            db,
            hotel_id,
            name: format!("Excursion {}", next_id()),
            description: fixture::excursion::DEFAULT_DESCRIPTION.to_string(),
            price: fixture::excursion::DEFAULT_PRICE,
            enabled: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the excursion entity into the database.
    pub async fn build(self) -> Result<entity::excursion::Model, DbErr> {
        entity::excursion::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            enabled: ActiveValue::Set(self.enabled),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an excursion with default values in the given hotel.
pub async fn create_excursion(
    db: &DatabaseConnection,
    hotel_id: Uuid,
) -> Result<entity::excursion::Model, DbErr> {
    ExcursionFactory::new(db, hotel_id).build().await
}
