// src/db/lookup.rs

use async_trait::async_trait;

use crate::{common::error::AppError, models::report::Product};

// Fonte dos produtos: o serviço de relatório só precisa de "id -> produto ou nada".
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<Product>, AppError>;
}

// Fonte das vendas: total de unidades vendidas nos últimos 30 dias (>= 0).
#[async_trait]
pub trait SalesLookup: Send + Sync {
    async fn total_past_thirty_days(&self, product_id: i32) -> Result<i64, AppError>;
}
