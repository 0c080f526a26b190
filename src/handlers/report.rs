// src/handlers/report.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::report::Report,
};

// GET /products/{product_id}/reports
#[utoipa::path(
    get,
    path = "/products/{product_id}/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "Relatório de vendas dos últimos 30 dias", body = Report),
        (status = 403, description = "Produto restrito (Super Top Secret)"),
        (status = 404, description = "Produto não encontrado"),
        (status = 500, description = "Erro inesperado ao consultar produtos ou vendas")
    ),
    params(
        ("product_id" = i32, Path, description = "ID do Produto")
    )
)]
pub async fn generate_report(
    State(app_state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {

    let report = app_state.report_service
        .generate_report(product_id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
