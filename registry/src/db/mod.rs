//! The `db` module provides functionality for interacting with the database.
//!
//! A [`Database`] owns a lazily connected sqlx `Any` pool together with the
//! [`Dialect`] of the server behind it. Models implement [`model::Model`]
//! (usually through `#[derive(Model)]`) and register their migration with
//! [`inventory`], so [`Database::migrate`] creates every table the binary
//! knows about.

use std::{future::Future, pin::Pin, time::Duration};

use sqlx::{any::AnyPoolOptions, pool::PoolConnection, Any, AnyPool};
use tracing::{debug, info, warn};

use crate::Config;

mod dialect;
pub mod model;
pub mod query;
pub mod schema;

pub use dialect::Dialect;

/// Failures of the model layer.
///
/// Acquiring a connection and running a statement are kept apart so pages
/// can tell an unreachable server from a failing query.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Connection(#[source] sqlx::Error),

    #[error("{0}")]
    Query(#[from] sqlx::Error),

    #[error("unsupported database url '{0}', expected sqlite:, mysql: or postgres:")]
    UnsupportedUrl(String),
}

/// Represents a database.
#[derive(Clone, Debug)]
pub struct Database {
    pool: AnyPool,
    dialect: Dialect,
}

impl Database {
    /// Builds the pool without touching the server.
    ///
    /// Only the URL is validated here; an unreachable server surfaces on the
    /// first [`Database::acquire`].
    pub fn connect(config: &Config) -> Result<Self, Error> {
        let dialect = Dialect::from_url(&config.database_url)?;

        sqlx::any::install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy(&config.database_url)
            .map_err(Error::Connection)?;

        info!(
            %dialect,
            max_connections = config.max_connections,
            "database pool configured"
        );
        Ok(Self { pool, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Takes one connection from the pool.
    pub async fn acquire(&self) -> Result<PoolConnection<Any>, Error> {
        self.pool.acquire().await.map_err(Error::Connection)
    }

    /// Creates the table of every registered model.
    pub async fn migrate(&self) -> Result<(), Error> {
        for model in inventory::iter::<MigrationRegistrar> {
            (model.migrate_fn)(self).await?;
        }
        debug!("migrations applied");
        Ok(())
    }

    /// Runs [`Database::migrate`] until the server accepts connections.
    ///
    /// Only connection failures are retried, `attempts` times in total.
    pub async fn migrate_until_ready(&self, attempts: u32, delay: Duration) -> Result<(), Error> {
        let mut attempt = 1;
        loop {
            match self.migrate().await {
                Err(Error::Connection(e)) if attempt < attempts => {
                    warn!(attempt, "database not reachable, retrying migration: {e}");
                    rocket::tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

pub type FutRes<'fut, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'fut>>;

pub type MigrateFn = for<'m> fn(&'m Database) -> FutRes<'m, (), Error>;

/// Registration record submitted by `#[derive(Model)]`.
pub struct MigrationRegistrar {
    pub migrate_fn: MigrateFn,
}

inventory::collect!(MigrationRegistrar);
