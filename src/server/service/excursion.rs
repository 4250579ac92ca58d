use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::excursion::ExcursionRepository,
    error::{hotel::HotelApiError, AppError},
    model::excursion::{validate_price, CreateExcursionParam, Excursion, UpdateExcursionParam},
    service::hotel::HotelService,
};

pub struct ExcursionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExcursionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an excursion to a hotel.
    ///
    /// # Returns
    /// - `Ok(Excursion)` - The created excursion with defaults applied
    /// - `Err(HotelApiError::HotelNotFound)` - No hotel with that name
    /// - `Err(AppError::BadRequest)` - Negative price
    /// - `Err(HotelApiError::ExcursionAlreadyExists)` - Name already used in the hotel
    pub async fn add_excursion(
        &self,
        hotel_name: &str,
        param: CreateExcursionParam,
    ) -> Result<Excursion, AppError> {
        let hotel = HotelService::new(self.db)
            .require(hotel_name, "add excursion")
            .await?;

        validate_price(param.price)?;

        let repo = ExcursionRepository::new(self.db);

        if repo
            .find_by_hotel_id_and_name(hotel.id, &param.name)
            .await?
            .is_some()
        {
            return Err(HotelApiError::ExcursionAlreadyExists(param.name).into());
        }

        let excursion = repo.create(Uuid::new_v4(), hotel.id, param).await?;

        tracing::info!(
            "Added excursion '{}' to hotel '{}'",
            excursion.name,
            hotel.name
        );

        Ok(excursion)
    }

    /// Gets an excursion of a hotel by name
    pub async fn get_excursion(
        &self,
        hotel_name: &str,
        name: &str,
    ) -> Result<Excursion, AppError> {
        self.require_excursion(hotel_name, name, "get excursion")
            .await
    }

    /// Gets all excursions of a hotel, failing with `NoExcursionsFound` when there are none
    pub async fn get_all_excursions(&self, hotel_name: &str) -> Result<Vec<Excursion>, AppError> {
        let hotel = HotelService::new(self.db)
            .require(hotel_name, "get all excursions")
            .await?;

        let excursions = ExcursionRepository::new(self.db)
            .find_by_hotel_id(hotel.id)
            .await?;

        if excursions.is_empty() {
            return Err(HotelApiError::NoExcursionsFound.into());
        }

        Ok(excursions)
    }

    /// Merges the present update fields onto the excursion located by name
    pub async fn update_excursion(
        &self,
        hotel_name: &str,
        param: UpdateExcursionParam,
    ) -> Result<Excursion, AppError> {
        let mut excursion = self
            .require_excursion(hotel_name, &param.name, "update excursion")
            .await?;

        if let Some(price) = param.price {
            validate_price(price)?;
        }

        param.apply_to(&mut excursion);

        let excursion = ExcursionRepository::new(self.db).save(excursion).await?;

        tracing::info!(
            "Updated excursion '{}' of hotel '{}'",
            excursion.name,
            hotel_name
        );

        Ok(excursion)
    }

    /// Enables or disables an excursion
    pub async fn set_enabled(
        &self,
        hotel_name: &str,
        name: &str,
        enabled: bool,
    ) -> Result<Excursion, AppError> {
        let mut excursion = self
            .require_excursion(hotel_name, name, "set excursion enabled")
            .await?;

        excursion.enabled = enabled;

        Ok(ExcursionRepository::new(self.db).save(excursion).await?)
    }

    /// Deletes an excursion and returns it as it was before deletion
    pub async fn delete_excursion(
        &self,
        hotel_name: &str,
        name: &str,
    ) -> Result<Excursion, AppError> {
        let excursion = self
            .require_excursion(hotel_name, name, "delete excursion")
            .await?;

        ExcursionRepository::new(self.db)
            .delete(excursion.id)
            .await?;

        tracing::info!(
            "Deleted excursion '{}' of hotel '{}'",
            excursion.name,
            hotel_name
        );

        Ok(excursion)
    }

    async fn require_excursion(
        &self,
        hotel_name: &str,
        name: &str,
        action: &'static str,
    ) -> Result<Excursion, AppError> {
        let hotel = HotelService::new(self.db).require(hotel_name, action).await?;

        ExcursionRepository::new(self.db)
            .find_by_hotel_id_and_name(hotel.id, name)
            .await?
            .ok_or_else(|| HotelApiError::ExcursionNotFound { action }.into())
    }
}
