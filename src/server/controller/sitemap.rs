use axum::{response::IntoResponse, Extension, Json};
use utoipa::openapi::{path::Operation, OpenApi};

use crate::model::api::{RouteDto, SitemapDto};

/// OpenAPI tag grouping the sitemap routes
pub static SITEMAP_TAG: &str = "sitemap";

/// List the routes of the API
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Every API route with its method", body = SitemapDto)
    ),
)]
pub async fn get_sitemap(Extension(sitemap): Extension<SitemapDto>) -> impl IntoResponse {
    Json(sitemap)
}

/// Builds the route listing from the paths registered in the OpenAPI document.
///
/// Routes are sorted by path, then by method.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut routes: Vec<RouteDto> = api
        .paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            let methods: [(&str, &Option<Operation>); 4] = [
                ("DELETE", &item.delete),
                ("GET", &item.get),
                ("POST", &item.post),
                ("PUT", &item.put),
            ];

            methods
                .into_iter()
                .filter(|(_, operation)| operation.is_some())
                .map(move |(method, _)| RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                })
        })
        .collect();

    routes.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));

    SitemapDto {
        msg: "Welcome to the Holonet API, these are the available routes".to_string(),
        routes,
    }
}
