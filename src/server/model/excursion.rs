//! Excursion domain models and parameters.

use uuid::Uuid;

use crate::{
    model::excursion::{CreateExcursionDto, ExcursionDto, UpdateExcursionDto},
    server::{
        error::AppError,
        model::{DEFAULT_DESCRIPTION, DEFAULT_ENABLED},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Excursion {
    pub id: Uuid,
    pub hotel_id: Uuid,
    /// Excursion name, unique within the hotel.
    pub name: String,
    pub description: String,
    /// Price per guest, never negative.
    pub price: f64,
    pub enabled: bool,
}

impl Excursion {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::excursion::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            enabled: entity.enabled,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ExcursionDto {
        ExcursionDto {
            name: self.name,
            description: self.description,
            price: self.price,
            enabled: self.enabled,
        }
    }
}

/// Rejects negative excursion prices.
///
/// # Returns
/// - `Ok(())` - Price is zero or positive
/// - `Err(AppError::BadRequest)` - Price is negative or not a number
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if price.is_nan() || price < 0.0 {
        return Err(AppError::BadRequest("Price should be positive".to_string()));
    }

    Ok(())
}

/// Parameters for creating an excursion with optional fields defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExcursionParam {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub enabled: bool,
}

impl From<CreateExcursionDto> for CreateExcursionParam {
    fn from(dto: CreateExcursionDto) -> Self {
        Self {
            name: dto.name,
            description: dto
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            price: dto.price,
            enabled: dto.enabled.unwrap_or(DEFAULT_ENABLED),
        }
    }
}

/// Parameters for updating an excursion located by `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExcursionParam {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub enabled: Option<bool>,
}

impl From<UpdateExcursionDto> for UpdateExcursionParam {
    fn from(dto: UpdateExcursionDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            enabled: dto.enabled,
        }
    }
}

impl UpdateExcursionParam {
    /// Copies the fields present on the update onto an existing excursion.
    pub fn apply_to(&self, excursion: &mut Excursion) {
        if let Some(description) = &self.description {
            excursion.description = description.clone();
        }
        if let Some(price) = self.price {
            excursion.price = price;
        }
        if let Some(enabled) = self.enabled {
            excursion.enabled = enabled;
        }
    }
}
