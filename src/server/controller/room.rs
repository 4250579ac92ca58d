use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        room::{
            AddRoomTagDto, CreateRoomDto, RoomAvailabilityQuery, RoomDto, RoomTagsQuery,
            UpdateRoomDto,
        },
    },
    server::{
        error::AppError,
        model::room::{CreateRoomParam, Room, UpdateRoomParam},
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

fn into_dtos(rooms: Vec<Room>) -> Vec<RoomDto> {
    rooms.into_iter().map(|r| r.into_dto()).collect()
}

/// Get every stored room, gated on the hotel existing.
///
/// # Returns
/// - `200 OK` - All rooms
/// - `404 Not Found` - Hotel not found, or no rooms are stored (`NO_ROOMS_FOUND`)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/rooms",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved rooms", body = Vec<RoomDto>),
        (status = 404, description = "Hotel not found or no rooms found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_rooms(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all_rooms(&hotel_name).await?;

    Ok((StatusCode::OK, Json(into_dtos(rooms))))
}

/// Add a room to a hotel.
///
/// Missing optional fields are filled with defaults: description `"No description"`,
/// available `true` and an empty tag set.
///
/// # Returns
/// - `201 Created` - The created room
/// - `404 Not Found` - Hotel not found
/// - `409 Conflict` - The hotel already has a room with this number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/hotels/{hotel_name}/rooms",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Successfully created room", body = RoomDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 409, description = "Room already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_room(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db)
        .add_room(&hotel_name, CreateRoomParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// Update a room located by the number in the request body.
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_name}/rooms",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Successfully updated room", body = RoomDto),
        (status = 404, description = "Hotel or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db)
        .update_room(&hotel_name, UpdateRoomParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Get the rooms of a hotel with the given availability.
///
/// An empty list is a successful response.
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/rooms/available",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        RoomAvailabilityQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved rooms", body = Vec<RoomDto>),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_available_rooms(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Query(query): Query<RoomAvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db)
        .get_all_available_rooms(&hotel_name, query.available)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(rooms))))
}

/// Get the rooms of a hotel carrying at least one of the comma-separated tags.
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/rooms/tagged",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        RoomTagsQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved rooms", body = Vec<RoomDto>),
        (status = 404, description = "Hotel not found or no rooms found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_rooms_by_hotel_name_and_tags(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Query(query): Query<RoomTagsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db)
        .get_all_rooms_by_hotel_name_and_tags(&hotel_name, &query.tag_set())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(rooms))))
}

/// Get a room of a hotel by number.
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/rooms/{number}",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("number" = i32, Path, description = "Room number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved room", body = RoomDto),
        (status = 404, description = "Hotel or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path((hotel_name, number)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db)
        .get_room(&hotel_name, number)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Set the availability of a room.
///
/// The request body is a bare JSON boolean.
#[utoipa::path(
    patch,
    path = "/api/hotels/{hotel_name}/rooms/{number}",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("number" = i32, Path, description = "Room number")
    ),
    request_body = bool,
    responses(
        (status = 200, description = "Successfully updated availability", body = RoomDto),
        (status = 404, description = "Hotel or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_room_available(
    State(state): State<AppState>,
    Path((hotel_name, number)): Path<(String, i32)>,
    Json(available): Json<bool>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db)
        .set_room_available(&hotel_name, number, available)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Delete a room and return it as it was before deletion.
#[utoipa::path(
    delete,
    path = "/api/hotels/{hotel_name}/rooms/{number}",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("number" = i32, Path, description = "Room number")
    ),
    responses(
        (status = 200, description = "Successfully deleted room", body = RoomDto),
        (status = 404, description = "Hotel or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path((hotel_name, number)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db)
        .delete_room(&hotel_name, number)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Attach a tag to a room.
///
/// # Returns
/// - `200 OK` - The room with its updated tag set
/// - `400 Bad Request` - Empty tag
/// - `404 Not Found` - Hotel or room not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/hotels/{hotel_name}/rooms/{number}/tags",
    tag = ROOM_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("number" = i32, Path, description = "Room number")
    ),
    request_body = AddRoomTagDto,
    responses(
        (status = 200, description = "Successfully tagged room", body = RoomDto),
        (status = 400, description = "Empty tag", body = ErrorDto),
        (status = 404, description = "Hotel or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_tag_to_room(
    State(state): State<AppState>,
    Path((hotel_name, number)): Path<(String, i32)>,
    Json(payload): Json<AddRoomTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db)
        .add_tag_to_room(&hotel_name, number, &payload.tag)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}
