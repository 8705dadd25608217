//! Wiring of the `PostgreSQL` adapters into a ready service.

use crate::config::DatabaseConfig;
use crate::task::{
    adapters::postgres::{PostgresTaskRepository, TaskPgPool},
    services::TaskBoardService,
};
use crate::user::adapters::postgres::PostgresUserRepository;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use std::sync::Arc;
use tracing::info;

/// Task board service backed by `PostgreSQL`.
pub type PostgresTaskBoardService =
    TaskBoardService<PostgresTaskRepository, PostgresUserRepository, DefaultClock>;

/// Builds the shared connection pool.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be established.
pub fn connect(config: &DatabaseConfig) -> Result<TaskPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;
    info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Creates a service whose repositories share `pool`.
#[must_use]
pub fn postgres_service(pool: &TaskPgPool) -> PostgresTaskBoardService {
    TaskBoardService::new(
        Arc::new(PostgresTaskRepository::new(pool.clone())),
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    )
}
