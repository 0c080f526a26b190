// src/db/product_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{common::error::AppError, db::lookup::ProductLookup, models::report::Product};

// Repositório de produtos, responsável pelas leituras na tabela 'products'
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um produto pelo seu ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}

#[async_trait]
impl ProductLookup for ProductRepository {
    async fn get(&self, id: i32) -> Result<Option<Product>, AppError> {
        self.find_by_id(id).await
    }
}
