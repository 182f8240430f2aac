use std::time::Duration;

use sqlx::postgres::{PgArguments, PgPool, PgPoolOptions, PgRow};
use sqlx::query::QueryAs;
use sqlx::{pool::PoolConnection, FromRow, Postgres};

use crate::config::DatabaseConfig;

/// Runs single statements against the pool.
///
/// Every call checks out one connection, runs one statement on it and hands the
/// connection back when the `PoolConnection` guard drops, on success and on error.
#[derive(Clone, Debug)]
pub struct DatabaseExecutor {
	pool: PgPool,
}

impl DatabaseExecutor {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}

	pub fn connection(&self) -> &PgPool {
		&self.pool
	}

	async fn acquire(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
		self.pool.acquire().await.map_err(|err| {
			tracing::debug!(error = %err, "Failed to check out a database connection");
			err
		})
	}

	pub async fn fetch_all<'q, O>(
		&self,
		query: QueryAs<'q, Postgres, O, PgArguments>,
	) -> Result<Vec<O>, sqlx::Error>
	where
		O: Send + Unpin + for<'r> FromRow<'r, PgRow>,
	{
		let mut conn = self.acquire().await?;
		query.fetch_all(&mut *conn).await
	}

	pub async fn fetch_one<'q, O>(
		&self,
		query: QueryAs<'q, Postgres, O, PgArguments>,
	) -> Result<O, sqlx::Error>
	where
		O: Send + Unpin + for<'r> FromRow<'r, PgRow>,
	{
		let mut conn = self.acquire().await?;
		query.fetch_one(&mut *conn).await
	}
}

/// Builds the bounded pool without touching the network; connections are
/// opened on first checkout, so the server starts while the backend is down.
pub fn connection_pool(config: &DatabaseConfig) -> PgPool {
	tracing::info!(
		host = %config.host,
		port = config.port,
		database = %config.database,
		max_connections = config.max_connections,
		accept_invalid_certs = config.accept_invalid_certs,
		"Configuring database pool"
	);
	if config.accept_invalid_certs {
		tracing::warn!("Database server certificate verification is disabled");
	}

	PgPoolOptions::new()
		.max_connections(config.max_connections)
		.acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
		.connect_lazy_with(config.connect_options())
}
