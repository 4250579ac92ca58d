//! Room domain models and parameters.
//!
//! Provides the room domain model with its tag set, the parameter models used to create
//! and update rooms, and the conversions between entities, domain models and DTOs.

use std::collections::BTreeSet;
use uuid::Uuid;

use crate::{
    model::room::{CreateRoomDto, RoomDto, UpdateRoomDto},
    server::{error::AppError, model::DEFAULT_DESCRIPTION},
};

/// Availability stored when a created room omits one.
pub const DEFAULT_AVAILABLE: bool = true;

/// A hotel room together with its tags.
///
/// Rooms are identified externally by `number`, which is unique within the owning
/// hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Generated identifier of the room row.
    pub id: Uuid,
    /// Identifier of the owning hotel.
    pub hotel_id: Uuid,
    /// Room number, unique within the hotel.
    pub number: i32,
    /// Free text description.
    pub description: String,
    /// Number of guests the room sleeps.
    pub capacity: i32,
    /// Nightly price.
    pub price: f64,
    /// Whether the room can currently be booked.
    pub available: bool,
    /// Tags attached to the room, e.g. "sea-view".
    pub tags: BTreeSet<String>,
}

impl Room {
    /// Converts a room entity and its tag rows to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The room entity from the database
    /// - `tags` - Tag rows belonging to the room
    pub fn from_entity(entity: entity::room::Model, tags: Vec<entity::room_tag::Model>) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            number: entity.number,
            description: entity.description,
            capacity: entity.capacity,
            price: entity.price,
            available: entity.available,
            tags: tags.into_iter().map(|t| t.tag).collect(),
        }
    }

    /// Converts the room domain model to a DTO for API responses.
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            number: self.number,
            description: self.description,
            capacity: self.capacity,
            price: self.price,
            available: self.available,
            tags: self.tags,
        }
    }
}

/// Trims a tag and rejects it when nothing is left.
///
/// # Returns
/// - `Ok(&str)` - The trimmed tag
/// - `Err(AppError::BadRequest)` - The tag is empty or whitespace only
pub fn normalize_tag(tag: &str) -> Result<&str, AppError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(AppError::BadRequest("Tag must not be empty".to_string()));
    }

    Ok(tag)
}

/// Applies `normalize_tag` to every tag of a set.
pub fn normalize_tags(tags: &BTreeSet<String>) -> Result<BTreeSet<String>, AppError> {
    tags.iter()
        .map(|tag| normalize_tag(tag).map(str::to_string))
        .collect()
}

/// Parameters for creating a room, with optional fields already defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoomParam {
    pub number: i32,
    pub description: String,
    pub capacity: i32,
    pub price: f64,
    pub available: bool,
    pub tags: BTreeSet<String>,
}

impl From<CreateRoomDto> for CreateRoomParam {
    fn from(dto: CreateRoomDto) -> Self {
        Self {
            number: dto.number,
            description: dto
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            capacity: dto.capacity,
            price: dto.price,
            available: dto.available.unwrap_or(DEFAULT_AVAILABLE),
            tags: dto.tags.unwrap_or_default(),
        }
    }
}

/// Parameters for updating a room. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRoomParam {
    pub number: i32,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
}

impl From<UpdateRoomDto> for UpdateRoomParam {
    fn from(dto: UpdateRoomDto) -> Self {
        Self {
            number: dto.number,
            description: dto.description,
            capacity: dto.capacity,
            price: dto.price,
            available: dto.available,
            tags: dto.tags,
        }
    }
}

impl UpdateRoomParam {
    /// Copies the fields present on the update onto an existing room.
    ///
    /// Identity fields (`id`, `hotel_id`, `number`) are never changed.
    pub fn apply_to(&self, room: &mut Room) {
        if let Some(description) = &self.description {
            room.description = description.clone();
        }
        if let Some(capacity) = self.capacity {
            room.capacity = capacity;
        }
        if let Some(price) = self.price {
            room.price = price;
        }
        if let Some(available) = self.available {
            room.available = available;
        }
        if let Some(tags) = &self.tags {
            room.tags = tags.clone();
        }
    }
}
