use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hotel::{CreateHotelDto, HotelDto},
    },
    server::{
        error::AppError, model::hotel::CreateHotelParam, service::hotel::HotelService,
        state::AppState,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// Create a new hotel.
///
/// # Returns
/// - `201 Created` - Successfully created hotel
/// - `400 Bad Request` - Empty hotel name
/// - `409 Conflict` - A hotel with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Successfully created hotel", body = HotelDto),
        (status = 400, description = "Empty hotel name", body = ErrorDto),
        (status = 409, description = "Hotel already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db)
        .create(CreateHotelParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(hotel.into_dto())))
}

/// Get all hotels ordered by name.
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved hotels", body = Vec<HotelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_hotels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db).get_all().await?;

    let hotels: Vec<HotelDto> = hotels.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(hotels)))
}

/// Get a hotel by name.
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}",
    tag = HOTEL_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hotel", body = HotelDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db).get_by_name(&hotel_name).await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// Delete a hotel together with its rooms, additional services and excursions.
///
/// # Returns
/// - `200 OK` - The deleted hotel
/// - `404 Not Found` - Hotel not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/hotels/{hotel_name}",
    tag = HOTEL_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    responses(
        (status = 200, description = "Successfully deleted hotel", body = HotelDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db).delete(&hotel_name).await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}
