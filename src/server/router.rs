use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{additional_service, excursion, hotel, room},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel API",
        description = "Management of hotels, rooms, additional services and excursions"
    ),
    tags(
        (name = "hotel", description = "Hotel lifecycle"),
        (name = "room", description = "Rooms, availability and tags"),
        (name = "additional-service", description = "Additional services offered by a hotel"),
        (name = "excursion", description = "Excursions offered by a hotel")
    )
)]
struct ApiDoc;

/// Builds the API router and mounts the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(hotel::create_hotel, hotel::get_all_hotels))
        .routes(routes!(hotel::get_hotel, hotel::delete_hotel))
        .routes(routes!(room::get_all_rooms, room::add_room, room::update_room))
        .routes(routes!(room::get_all_available_rooms))
        .routes(routes!(room::get_all_rooms_by_hotel_name_and_tags))
        .routes(routes!(
            room::get_room,
            room::set_room_available,
            room::delete_room
        ))
        .routes(routes!(room::add_tag_to_room))
        .routes(routes!(
            additional_service::get_all_additional_services,
            additional_service::add_additional_service,
            additional_service::update_additional_service
        ))
        .routes(routes!(
            additional_service::get_additional_service,
            additional_service::set_additional_service_enabled,
            additional_service::delete_additional_service
        ))
        .routes(routes!(
            excursion::get_all_excursions,
            excursion::add_excursion,
            excursion::update_excursion
        ))
        .routes(routes!(
            excursion::get_excursion,
            excursion::set_excursion_enabled,
            excursion::delete_excursion
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
