// src/services/report_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{sales_repo::SALES_WINDOW_DAYS, ProductLookup, SalesLookup},
    models::report::Report,
};

// Produto "Super Top Secret": sempre negado, exista ou não.
pub const RESTRICTED_PRODUCT_ID: i32 = 999;

// Produto com curto-circuito explícito quando não houve vendas.
pub const ZERO_SALES_GUARD_PRODUCT_ID: i32 = 1;

#[derive(Clone)]
pub struct ReportService {
    products: Arc<dyn ProductLookup>,
    sales: Arc<dyn SalesLookup>,
}

impl ReportService {
    pub fn new(products: Arc<dyn ProductLookup>, sales: Arc<dyn SalesLookup>) -> Self {
        Self { products, sales }
    }

    pub async fn generate_report(&self, product_id: i32) -> Result<Report, AppError> {
        // 1. Sentinela, antes de qualquer leitura
        if product_id == RESTRICTED_PRODUCT_ID {
            tracing::warn!(product_id, "Acesso negado ao produto restrito");
            return Err(AppError::RestrictedProduct);
        }

        // 2. Produto
        let product = match self.products.get(product_id).await? {
            Some(product) => product,
            None => {
                tracing::info!(product_id, "Produto não encontrado");
                return Err(AppError::ProductNotFound(product_id));
            }
        };

        // 3. Total de vendas na janela
        let total_sales = self.sales.total_past_thirty_days(product_id).await?;

        // 4. Média diária (divisor constante, nunca zero)
        let daily_sales = total_sales as f64 / SALES_WINDOW_DAYS as f64;

        // 5. Produto 1 sem vendas: zera tudo sem passar pela multiplicação
        if product_id == ZERO_SALES_GUARD_PRODUCT_ID && daily_sales == 0.0 {
            tracing::info!(product_id, total_sales, "Relatório gerado sem vendas");
            return Ok(Report::zero_sales(product, total_sales));
        }

        // 6. Fórmula geral
        let report = Report::from_sales(product, total_sales, daily_sales);

        tracing::info!(
            product_id,
            total_sales,
            daily_sales = report.daily_sales_past_thirty_days,
            gross_income = report.gross_income,
            "Relatório gerado"
        );

        Ok(report)
    }
}
