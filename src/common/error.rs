use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erros da aplicação. Os dois primeiros são os erros "de negócio" do relatório,
// o resto é falha de infraestrutura.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Super Top Secret Product. Unauthorized access.")]
    RestrictedProduct,

    #[error("Product with ID {0} not found.")]
    ProductNotFound(i32),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::RestrictedProduct => StatusCode::FORBIDDEN,
            AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_message = match &self {
            AppError::RestrictedProduct | AppError::ProductNotFound(_) => self.to_string(),

            // Falhas internas: o detalhe vai para o log, o cliente recebe mensagem genérica.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                "An unexpected error occurred.".to_string()
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_map_to_distinct_statuses() {
        assert_eq!(AppError::RestrictedProduct.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::ProductNotFound(42).status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_message_carries_the_id() {
        assert_eq!(
            AppError::ProductNotFound(42).to_string(),
            "Product with ID 42 not found."
        );
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        let err = AppError::from(anyhow::anyhow!("pool closed"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
