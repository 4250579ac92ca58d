use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        additional_service::{
            AdditionalServiceDto, CreateAdditionalServiceDto, UpdateAdditionalServiceDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        model::additional_service::{CreateAdditionalServiceParam, UpdateAdditionalServiceParam},
        service::additional_service::AdditionalServiceService,
        state::AppState,
    },
};

/// Tag for grouping additional service endpoints in OpenAPI documentation
pub static ADDITIONAL_SERVICE_TAG: &str = "additional-service";

/// Get all additional services of a hotel.
///
/// # Returns
/// - `200 OK` - Services of the hotel
/// - `404 Not Found` - Hotel not found, or the hotel offers no services
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/additional-services",
    tag = ADDITIONAL_SERVICE_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved additional services", body = Vec<AdditionalServiceDto>),
        (status = 404, description = "Hotel not found or no additional services found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_additional_services(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let services = AdditionalServiceService::new(&state.db)
        .get_all_additional_services(&hotel_name)
        .await?;

    let services: Vec<AdditionalServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(services)))
}

/// Add an additional service to a hotel.
#[utoipa::path(
    post,
    path = "/api/hotels/{hotel_name}/additional-services",
    tag = ADDITIONAL_SERVICE_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    request_body = CreateAdditionalServiceDto,
    responses(
        (status = 201, description = "Successfully created additional service", body = AdditionalServiceDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 409, description = "Additional service already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_additional_service(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Json(payload): Json<CreateAdditionalServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdditionalServiceService::new(&state.db)
        .add_additional_service(&hotel_name, CreateAdditionalServiceParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

/// Update an additional service located by the name in the request body.
#[utoipa::path(
    put,
    path = "/api/hotels/{hotel_name}/additional-services",
    tag = ADDITIONAL_SERVICE_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name")
    ),
    request_body = UpdateAdditionalServiceDto,
    responses(
        (status = 200, description = "Successfully updated additional service", body = AdditionalServiceDto),
        (status = 404, description = "Hotel or additional service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_additional_service(
    State(state): State<AppState>,
    Path(hotel_name): Path<String>,
    Json(payload): Json<UpdateAdditionalServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdditionalServiceService::new(&state.db)
        .update_additional_service(&hotel_name, UpdateAdditionalServiceParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{hotel_name}/additional-services/{service_name}",
    tag = ADDITIONAL_SERVICE_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("service_name" = String, Path, description = "Additional service name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved additional service", body = AdditionalServiceDto),
        (status = 404, description = "Hotel or additional service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_additional_service(
    State(state): State<AppState>,
    Path((hotel_name, service_name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdditionalServiceService::new(&state.db)
        .get_additional_service(&hotel_name, &service_name)
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Enable or disable an additional service.
///
/// The request body is a bare JSON boolean.
#[utoipa::path(
    patch,
    path = "/api/hotels/{hotel_name}/additional-services/{service_name}",
    tag = ADDITIONAL_SERVICE_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("service_name" = String, Path, description = "Additional service name")
    ),
    request_body = bool,
    responses(
        (status = 200, description = "Successfully updated additional service", body = AdditionalServiceDto),
        (status = 404, description = "Hotel or additional service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_additional_service_enabled(
    State(state): State<AppState>,
    Path((hotel_name, service_name)): Path<(String, String)>,
    Json(enabled): Json<bool>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdditionalServiceService::new(&state.db)
        .set_enabled(&hotel_name, &service_name, enabled)
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/hotels/{hotel_name}/additional-services/{service_name}",
    tag = ADDITIONAL_SERVICE_TAG,
    params(
        ("hotel_name" = String, Path, description = "Hotel name"),
        ("service_name" = String, Path, description = "Additional service name")
    ),
    responses(
        (status = 200, description = "Successfully deleted additional service", body = AdditionalServiceDto),
        (status = 404, description = "Hotel or additional service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_additional_service(
    State(state): State<AppState>,
    Path((hotel_name, service_name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdditionalServiceService::new(&state.db)
        .delete_additional_service(&hotel_name, &service_name)
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}
