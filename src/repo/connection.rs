use std::sync::Arc;

use sqlx::{
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres, Transaction,
};
use tracing::debug;

use crate::{config::DatabaseConfig, repo::error::RepoError};

/// Hands out one connection per unit of work. Callers hold the returned
/// connection (or transaction) for the whole request and drop it when done.
#[derive(Clone)]
pub struct Database {
    pool: Arc<PgPool>,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let pool = Self::pool_options(config)
            .connect_with(Self::connect_options(config)?)
            .await?;
        debug!(max_connections = config.max_connections, "database pool ready");
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Builds the pool without opening any connection until first use.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let pool = Self::pool_options(config).connect_lazy_with(Self::connect_options(config)?);
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
    }

    fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, RepoError> {
        Ok(config.url.parse::<PgConnectOptions>()?)
    }

    pub async fn migrate(&self) -> Result<(), RepoError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        Ok(())
    }

    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, RepoError> {
        Ok(self.pool.acquire().await?)
    }

    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, RepoError> {
        Ok(self.pool.begin().await?)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
