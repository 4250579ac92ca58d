use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::additional_service::AdditionalServiceRepository,
    error::{hotel::HotelApiError, AppError},
    model::additional_service::{
        AdditionalService, CreateAdditionalServiceParam, UpdateAdditionalServiceParam,
    },
    service::hotel::HotelService,
};

pub struct AdditionalServiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdditionalServiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an additional service to a hotel.
    ///
    /// # Returns
    /// - `Ok(AdditionalService)` - The created service with defaults applied
    /// - `Err(HotelApiError::HotelNotFound)` - No hotel with that name
    /// - `Err(HotelApiError::AdditionalServiceAlreadyExists)` - Name already used in the hotel
    pub async fn add_additional_service(
        &self,
        hotel_name: &str,
        param: CreateAdditionalServiceParam,
    ) -> Result<AdditionalService, AppError> {
        let hotel = HotelService::new(self.db)
            .require(hotel_name, "add additional service")
            .await?;

        let repo = AdditionalServiceRepository::new(self.db);

        if repo
            .find_by_hotel_id_and_name(hotel.id, &param.name)
            .await?
            .is_some()
        {
            return Err(HotelApiError::AdditionalServiceAlreadyExists(param.name).into());
        }

        let service = repo.create(Uuid::new_v4(), hotel.id, param).await?;

        tracing::info!(
            "Added additional service '{}' to hotel '{}'",
            service.name,
            hotel.name
        );

        Ok(service)
    }

    /// Gets an additional service of a hotel by name
    pub async fn get_additional_service(
        &self,
        hotel_name: &str,
        name: &str,
    ) -> Result<AdditionalService, AppError> {
        self.require_service(hotel_name, name, "get additional service")
            .await
    }

    /// Gets all additional services of a hotel.
    ///
    /// # Returns
    /// - `Ok(Vec<AdditionalService>)` - Services of the hotel, never empty
    /// - `Err(HotelApiError::HotelNotFound)` - No hotel with that name
    /// - `Err(HotelApiError::NoAdditionalServicesFound)` - The hotel offers no services
    pub async fn get_all_additional_services(
        &self,
        hotel_name: &str,
    ) -> Result<Vec<AdditionalService>, AppError> {
        let hotel = HotelService::new(self.db)
            .require(hotel_name, "get all additional services")
            .await?;

        let services = AdditionalServiceRepository::new(self.db)
            .find_by_hotel_id(hotel.id)
            .await?;

        if services.is_empty() {
            return Err(HotelApiError::NoAdditionalServicesFound.into());
        }

        Ok(services)
    }

    /// Merges the present update fields onto the service located by name
    pub async fn update_additional_service(
        &self,
        hotel_name: &str,
        param: UpdateAdditionalServiceParam,
    ) -> Result<AdditionalService, AppError> {
        let mut service = self
            .require_service(hotel_name, &param.name, "update additional service")
            .await?;

        param.apply_to(&mut service);

        let service = AdditionalServiceRepository::new(self.db)
            .save(service)
            .await?;

        tracing::info!(
            "Updated additional service '{}' of hotel '{}'",
            service.name,
            hotel_name
        );

        Ok(service)
    }

    /// Enables or disables an additional service
    pub async fn set_enabled(
        &self,
        hotel_name: &str,
        name: &str,
        enabled: bool,
    ) -> Result<AdditionalService, AppError> {
        let mut service = self
            .require_service(hotel_name, name, "set additional service enabled")
            .await?;

        service.enabled = enabled;

        Ok(AdditionalServiceRepository::new(self.db)
            .save(service)
            .await?)
    }

    /// Deletes an additional service and returns it as it was before deletion
    pub async fn delete_additional_service(
        &self,
        hotel_name: &str,
        name: &str,
    ) -> Result<AdditionalService, AppError> {
        let service = self
            .require_service(hotel_name, name, "delete additional service")
            .await?;

        AdditionalServiceRepository::new(self.db)
            .delete(service.id)
            .await?;

        tracing::info!(
            "Deleted additional service '{}' of hotel '{}'",
            service.name,
            hotel_name
        );

        Ok(service)
    }

    async fn require_service(
        &self,
        hotel_name: &str,
        name: &str,
        action: &'static str,
    ) -> Result<AdditionalService, AppError> {
        let hotel = HotelService::new(self.db).require(hotel_name, action).await?;

        AdditionalServiceRepository::new(self.db)
            .find_by_hotel_id_and_name(hotel.id, name)
            .await?
            .ok_or_else(|| HotelApiError::AdditionalServiceNotFound { action }.into())
    }
}
