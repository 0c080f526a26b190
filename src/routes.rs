// src/routes.rs

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn build_router(app_state: AppState) -> Router {
    let report_routes = Router::new()
        .route("/{product_id}/reports", get(handlers::report::generate_report));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/products", report_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
