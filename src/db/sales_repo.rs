// src/db/sales_repo.rs

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;

use crate::{common::error::AppError, db::lookup::SalesLookup};

pub const SALES_WINDOW_DAYS: i64 = 30;

// Início da janela de vendas que termina em `now`.
pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(SALES_WINDOW_DAYS)
}

#[derive(Clone)]
pub struct SalesRepository {
    pool: PgPool,
}

impl SalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Soma das quantidades vendidas a partir de `since`.
    // Sem vendas (ou produto inexistente) o COALESCE devolve 0.
    pub async fn total_since(&self, product_id: i32, since: DateTime<Utc>) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(quantity), 0)::BIGINT
            FROM sales
            WHERE product_id = $1
              AND sold_at >= $2
            "#,
        )
        .bind(product_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

#[async_trait]
impl SalesLookup for SalesRepository {
    async fn total_past_thirty_days(&self, product_id: i32) -> Result<i64, AppError> {
        self.total_since(product_id, window_start(Utc::now())).await
    }
}
