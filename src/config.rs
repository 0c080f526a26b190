// src/config.rs

use crate::{
    db::{ProductRepository, SalesRepository},
    services::ReportService,
};
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, str::FromStr, sync::Arc, time::Duration};

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", 5)?;
        let acquire_timeout_secs = parse_or("DATABASE_ACQUIRE_TIMEOUT_SECS", 3)?;

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        Ok(pool)
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} inválida: {value:?}")),
        None => Ok(default),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
}

impl AppState {
    // Monta o gráfico de dependências sobre o pool do Postgres
    pub fn new(db_pool: PgPool) -> Self {
        let product_repo = ProductRepository::new(db_pool.clone());
        let sales_repo = SalesRepository::new(db_pool);
        let report_service = ReportService::new(Arc::new(product_repo), Arc::new(sales_repo));

        Self::with_service(report_service)
    }

    pub fn with_service(report_service: ReportService) -> Self {
        Self { report_service }
    }
}
