use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::hotel::HotelRepository,
    error::{hotel::HotelApiError, AppError},
    model::hotel::{CreateHotelParam, Hotel},
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a hotel by name or fails with `HotelNotFound`.
    ///
    /// This is the first phase of the existence gate shared by every child service.
    ///
    /// # Arguments
    /// - `name` - Hotel name taken from the request path
    /// - `action` - Description of the attempted operation, used in the error message
    pub async fn require(&self, name: &str, action: &'static str) -> Result<Hotel, AppError> {
        let hotel = HotelRepository::new(self.db).find_by_name(name).await?;

        match hotel {
            Some(hotel) => Ok(hotel),
            None => {
                tracing::debug!("Hotel '{}' not found while trying to {}", name, action);
                Err(HotelApiError::HotelNotFound { action }.into())
            }
        }
    }

    /// Creates a new hotel with a generated identifier
    pub async fn create(&self, param: CreateHotelParam) -> Result<Hotel, AppError> {
        if param.name.is_empty() {
            return Err(AppError::BadRequest(
                "Hotel name must not be empty".to_string(),
            ));
        }

        let repo = HotelRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(HotelApiError::HotelAlreadyExists(param.name).into());
        }

        let hotel = repo.create(Uuid::new_v4(), param).await?;

        tracing::info!("Created hotel '{}' ({})", hotel.name, hotel.id);

        Ok(hotel)
    }

    /// Gets a hotel by name
    pub async fn get_by_name(&self, name: &str) -> Result<Hotel, AppError> {
        self.require(name, "get hotel").await
    }

    /// Gets all hotels, an empty list when none exist
    pub async fn get_all(&self) -> Result<Vec<Hotel>, AppError> {
        Ok(HotelRepository::new(self.db).find_all().await?)
    }

    /// Deletes a hotel together with its rooms, services and excursions
    pub async fn delete(&self, name: &str) -> Result<Hotel, AppError> {
        let hotel = self.require(name, "delete hotel").await?;

        HotelRepository::new(self.db).delete(hotel.id).await?;

        tracing::info!("Deleted hotel '{}' ({})", hotel.name, hotel.id);

        Ok(hotel)
    }
}
