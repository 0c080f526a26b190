// src/db/memory.rs
//
// Implementações em memória dos lookups, usadas nos testes do serviço e das rotas.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    db::lookup::{ProductLookup, SalesLookup},
    models::report::Product,
};

#[derive(Default)]
pub struct InMemoryProducts {
    products: HashMap<i32, Product>,
    pub calls: AtomicUsize,
}

impl InMemoryProducts {
    pub fn with(mut self, id: i32, name: &str, price: f64) -> Self {
        self.products.insert(
            id,
            Product {
                id,
                name: name.to_string(),
                description: None,
                price,
            },
        );
        self
    }
}

#[async_trait]
impl ProductLookup for InMemoryProducts {
    async fn get(&self, id: i32) -> Result<Option<Product>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.get(&id).cloned())
    }
}

#[derive(Default)]
pub struct InMemorySales {
    totals: HashMap<i32, i64>,
}

impl InMemorySales {
    pub fn with(mut self, product_id: i32, total: i64) -> Self {
        self.totals.insert(product_id, total);
        self
    }
}

#[async_trait]
impl SalesLookup for InMemorySales {
    async fn total_past_thirty_days(&self, product_id: i32) -> Result<i64, AppError> {
        Ok(self.totals.get(&product_id).copied().unwrap_or(0))
    }
}

// Simula o banco fora do ar.
pub struct BrokenSales;

#[async_trait]
impl SalesLookup for BrokenSales {
    async fn total_past_thirty_days(&self, _product_id: i32) -> Result<i64, AppError> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }
}
