//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint together with its OpenAPI specification, derives
//! the route listing served at `/` from that document, and mounts Swagger UI at `/api/docs`.

use axum::{Extension, Router};
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::fallback},
    model::app::AppState,
};

/// Collects every API endpoint and the OpenAPI document describing them.
///
/// # Registered Endpoints
/// - `GET /` - Route listing
/// - `GET|POST /user`, `GET /user/{user_id}`
/// - `GET|POST /planet`, `GET|PUT|DELETE /planet/{planet_id}`
/// - `GET|POST /character`, `GET|PUT|DELETE /character/{character_id}`
/// - `GET /favorites`, `POST /favorite`, `DELETE /favorite/{favorite_id}`
///
/// # Returns
/// The API router, still awaiting its [`AppState`], and the OpenAPI document.
pub fn routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        (name = controller::sitemap::SITEMAP_TAG, description = "Route listing"),
    ))]
    struct ApiDoc;

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::get_sitemap))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(controller::favorite::create_favorite))
        .routes(routes!(controller::favorite::delete_favorite))
        .split_for_parts()
}

/// Builds the complete application with its state applied.
///
/// Trailing slashes are trimmed before the API routes are matched, so `/planet/` and `/planet`
/// are the same endpoint. Unknown paths answer 404 and unsupported methods 405, both with a
/// `{"msg": ...}` body. Swagger UI is mounted outside of that normalization since it serves
/// its assets below `/api/docs/`. Every request is traced.
pub fn app(state: AppState) -> Router {
    let (api_routes, api) = routes();

    let sitemap = controller::sitemap::build_sitemap(&api);
    let api_routes = api_routes
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(Extension(sitemap))
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback_service(NormalizePathLayer::trim_trailing_slash().layer(api_routes))
        .layer(TraceLayer::new_for_http())
}
