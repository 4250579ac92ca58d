//! Additional service domain models and parameters.
//!
//! Additional services (breakfast, spa access, airport transfer, ...) are offered per
//! hotel and identified within it by name.

use uuid::Uuid;

use crate::{
    model::additional_service::{
        AdditionalServiceDto, CreateAdditionalServiceDto, UpdateAdditionalServiceDto,
    },
    server::model::{DEFAULT_DESCRIPTION, DEFAULT_ENABLED},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalService {
    pub id: Uuid,
    pub hotel_id: Uuid,
    /// Service name, unique within the hotel.
    pub name: String,
    pub description: String,
    /// Whether guests can currently order the service.
    pub enabled: bool,
}

impl AdditionalService {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::additional_service::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            name: entity.name,
            description: entity.description,
            enabled: entity.enabled,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> AdditionalServiceDto {
        AdditionalServiceDto {
            name: self.name,
            description: self.description,
            enabled: self.enabled,
        }
    }
}

/// Parameters for creating an additional service.
///
/// Built from the request DTO with `description` defaulting to "No description" and
/// `enabled` defaulting to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAdditionalServiceParam {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl From<CreateAdditionalServiceDto> for CreateAdditionalServiceParam {
    fn from(dto: CreateAdditionalServiceDto) -> Self {
        Self {
            name: dto.name,
            description: dto
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            enabled: dto.enabled.unwrap_or(DEFAULT_ENABLED),
        }
    }
}

/// Parameters for updating an additional service located by `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAdditionalServiceParam {
    pub name: String,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

impl From<UpdateAdditionalServiceDto> for UpdateAdditionalServiceParam {
    fn from(dto: UpdateAdditionalServiceDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            enabled: dto.enabled,
        }
    }
}

impl UpdateAdditionalServiceParam {
    /// Copies the fields present on the update onto an existing service.
    pub fn apply_to(&self, service: &mut AdditionalService) {
        if let Some(description) = &self.description {
            service.description = description.clone();
        }
        if let Some(enabled) = self.enabled {
            service.enabled = enabled;
        }
    }
}
