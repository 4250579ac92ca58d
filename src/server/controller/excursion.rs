use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        excursion::{CreateExcursionDto, ExcursionDto, UpdateExcursionDto},
    },
    server::{
        error::AppError,
        model::excursion::{CreateExcursionParam, UpdateExcursionParam},
        service::excursion::ExcursionService,
        state::AppState,
    },
};

/// Tag for grouping excursion endpoints in OpenAPI documentation
pub static EXCURSION_TAG: &str = "excursion";

#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/excursions",
    tag = EXCURSION_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved excursions", body = Vec<ExcursionDto>),
        (status = 404, description = "Hotel not found or no excursions found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_excursions(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let excursions = ExcursionService::new(&state.db)
        .get_all_excursions(&hotel_name)
        .await?;

    let excursions: Vec<ExcursionDto> = excursions.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(excursions)))
}

/// Add an excursion to a hotel.
///
/// # Returns
/// - `201 Created` - The created excursion
/// - `400 Bad Request` - Negative price
/// - `404 Not Found` - Hotel not found
/// - `409 Conflict` - The hotel already has an excursion with this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/hotels/{hotel_name}/excursions",
    tag = EXCURSION_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    request_body = CreateExcursionDto,
    responses(
        (status = 201, description = "Successfully created excursion", body = ExcursionDto),
        (status = 400, description = "Negative price", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 409, description = "Excursion already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_excursion(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Json(payload): Json<CreateExcursionDto>,
) -> Result<impl IntoResponse, AppError> {
    let excursion = ExcursionService::new(&state.db)
        .add_excursion(&hotel_name, CreateExcursionParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(excursion.into_dto())))
}

/// Update an excursion located by the name in the request body.
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_name}/excursions",
    tag = EXCURSION_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    request_body = UpdateExcursionDto,
    responses(
        (status = 200, description = "Successfully updated excursion", body = ExcursionDto),
        (status = 400, description = "Negative price", body = ErrorDto),
        (status = 404, description = "Hotel or excursion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_excursion(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Json(payload): Json<UpdateExcursionDto>,
) -> Result<impl IntoResponse, AppError> {
    let excursion = ExcursionService::new(&state.db)
        .update_excursion(&hotel_name, UpdateExcursionParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(excursion.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/excursions/{excursion_name}",
    tag = EXCURSION_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("excursion_name" = String, Path, description = "Excursion name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved excursion", body = ExcursionDto),
        (status = 404, description = "Hotel or excursion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_excursion(
    State(state): State<AppState>,
    Path((hotel_name, excursion_name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let excursion = ExcursionService::new(&state.db)
        .get_excursion(&hotel_name, &excursion_name)
        .await?;

    Ok((StatusCode::OK, Json(excursion.into_dto())))
}

/// Enable or disable an excursion.
#[utoipa::path(
    patch,
    path = "/api/hotels/{hotel_name}/excursions/{excursion_name}",
    tag = EXCURSION_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("excursion_name" = String, Path, description = "Excursion name")
    ),
    request_body = bool,
    responses(
        (status = 200, description = "Successfully updated excursion", body = ExcursionDto),
        (status = 404, description = "Hotel or excursion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_excursion_enabled(
    State(state): State<AppState>,
    Path((hotel_name, excursion_name)): Path<(String, String)>,
    Json(enabled): Json<bool>,
) -> Result<impl IntoResponse, AppError> {
    let excursion = ExcursionService::new(&state.db)
        .set_enabled(&hotel_name, &excursion_name, enabled)
        .await?;

    Ok((StatusCode::OK, Json(excursion.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/hotels/{hotel_name}/excursions/{excursion_name}",
    tag = EXCURSION_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("excursion_name" = String, Path, description = "Excursion name")
    ),
    responses(
        (status = 200, description = "Successfully deleted excursion", body = ExcursionDto),
        (status = 404, description = "Hotel or excursion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_excursion(
    State(state): State<AppState>,
    Path((hotel_name, excursion_name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let excursion = ExcursionService::new(&state.db)
        .delete_excursion(&hotel_name, &excursion_name)
        .await?;

    Ok((StatusCode::OK, Json(excursion.into_dto())))
}
