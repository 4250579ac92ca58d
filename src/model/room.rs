use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub number: i32,
    pub description: String,
    pub capacity: i32,
    pub price: f64,
    pub available: bool,
    pub tags: BTreeSet<String>,
}

/// Request body for adding a room to a hotel.
///
/// `description` defaults to "No description", `available` to `true` and `tags`
/// to an empty set when omitted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRoomDto {
    pub number: i32,
    pub description: Option<String>,
    pub capacity: i32,
    pub price: f64,
    pub available: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
}

/// Request body for updating a room.
///
/// `number` identifies the room within the hotel; every other field is only
/// applied when present.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateRoomDto {
    pub number: i32,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddRoomTagDto {
    pub tag: String,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomAvailabilityQuery {
    /// Availability flag to filter rooms by
    pub available: bool,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomTagsQuery {
    /// Comma separated list of tags, e.g. `sea-view,balcony`
    pub tags: String,
}

impl RoomTagsQuery {
    /// Splits the comma separated tag list, dropping blank entries.
    pub fn tag_set(&self) -> BTreeSet<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}
