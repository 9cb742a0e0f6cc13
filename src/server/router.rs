//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! serves the generated document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/admin/council-members/merge` - Merge selected council members into a primary
/// - `GET /api/admin/council-members` - List selected council members
/// - `GET /api/search/legislation` - Index documents for recently updated legislation
/// - `GET /api/search/minutes` - Index documents for recently updated minutes
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Councilmatic", description = "Councilmatic API"), tags(
        (name = controller::member::MEMBER_TAG, description = "Council member administration routes"),
        (name = controller::search::SEARCH_TAG, description = "Search indexing routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::member::merge_members))
        .routes(routes!(controller::member::get_members))
        .routes(routes!(controller::search::get_legislation_documents))
        .routes(routes!(controller::search::get_minutes_documents))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
