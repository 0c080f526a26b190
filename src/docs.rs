// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Reports ---
        handlers::report::generate_report,
    ),
    components(
        schemas(
            models::report::Product,
            models::report::Report,
        )
    ),
    tags(
        (name = "Reports", description = "Relatórios de Vendas por Produto")
    )
)]
pub struct ApiDoc;
