use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookup and uniqueness failures raised by the hotel services.
///
/// Every variant is request-terminal: it is raised where the failed check happens and
/// propagated unchanged to the controller boundary. Not-found variants carry the action
/// that was attempted so the message tells the caller what could not be done.
#[derive(Error, Debug, PartialEq)]
pub enum HotelApiError {
    /// Parent hotel lookup by name failed.
    #[error("Unable to {action}: hotel with this name is not found")]
    HotelNotFound { action: &'static str },

    /// Room lookup by `(hotel_id, number)` failed.
    #[error("Unable to {action}: room with this number is not found")]
    RoomNotFound { action: &'static str },

    /// A room listing for a valid hotel produced no results.
    #[error("No rooms found")]
    NoRoomsFound,

    /// Additional service lookup by `(hotel_id, name)` failed.
    #[error("Unable to {action}: additional service with this name is not found")]
    AdditionalServiceNotFound { action: &'static str },

    /// The hotel has no additional services.
    #[error("No additional services found")]
    NoAdditionalServicesFound,

    /// Excursion lookup by `(hotel_id, name)` failed.
    #[error("Unable to {action}: excursion with this name is not found")]
    ExcursionNotFound { action: &'static str },

    /// The hotel has no excursions.
    #[error("No excursions found")]
    NoExcursionsFound,

    #[error("Hotel with name '{0}' already exists")]
    HotelAlreadyExists(String),

    #[error("Room with number {0} already exists in this hotel")]
    RoomAlreadyExists(i32),

    #[error("Additional service with name '{0}' already exists in this hotel")]
    AdditionalServiceAlreadyExists(String),

    #[error("Excursion with name '{0}' already exists in this hotel")]
    ExcursionAlreadyExists(String),
}

impl HotelApiError {
    /// Stable machine readable identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::HotelNotFound { .. } => "HOTEL_NOT_FOUND",
            Self::RoomNotFound { .. } => "ROOM_NOT_FOUND",
            Self::NoRoomsFound => "NO_ROOMS_FOUND",
            Self::AdditionalServiceNotFound { .. } => "ADDITIONAL_SERVICE_NOT_FOUND",
            Self::NoAdditionalServicesFound => "NO_ADDITIONAL_SERVICES_FOUND",
            Self::ExcursionNotFound { .. } => "EXCURSION_NOT_FOUND",
            Self::NoExcursionsFound => "NO_EXCURSIONS_FOUND",
            Self::HotelAlreadyExists(_) => "HOTEL_ALREADY_EXISTS",
            Self::RoomAlreadyExists(_) => "ROOM_ALREADY_EXISTS",
            Self::AdditionalServiceAlreadyExists(_) => "ADDITIONAL_SERVICE_ALREADY_EXISTS",
            Self::ExcursionAlreadyExists(_) => "EXCURSION_ALREADY_EXISTS",
        }
    }

    /// HTTP status the error kind is surfaced as.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::HotelAlreadyExists(_)
            | Self::RoomAlreadyExists(_)
            | Self::AdditionalServiceAlreadyExists(_)
            | Self::ExcursionAlreadyExists(_) => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        }
    }
}

/// Converts hotel API errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For every not-found and empty-listing kind
/// - 409 Conflict - For duplicate names or room numbers
impl IntoResponse for HotelApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
                code: Some(self.code().to_string()),
            }),
        )
            .into_response()
    }
}
