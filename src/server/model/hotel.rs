//! Hotel domain models and parameters.
//!
//! The hotel is the root of ownership: every room, additional service and excursion
//! references a hotel, and all child operations resolve their hotel by name first.

use uuid::Uuid;

use crate::model::hotel::{CreateHotelDto, HotelDto};

/// A hotel resolved from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    /// Generated identifier referenced by child entities as `hotel_id`.
    pub id: Uuid,
    /// Unique hotel name, the external lookup key.
    pub name: String,
}

impl Hotel {
    /// Converts an entity model to a hotel domain model at the repository boundary.
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the hotel domain model to a DTO for API responses.
    pub fn into_dto(self) -> HotelDto {
        HotelDto { name: self.name }
    }
}

/// Parameters for creating a new hotel.
#[derive(Debug, Clone)]
pub struct CreateHotelParam {
    pub name: String,
}

impl From<CreateHotelDto> for CreateHotelParam {
    fn from(dto: CreateHotelDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}
