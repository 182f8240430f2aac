use std::sync::OnceLock;

use crate::{
	adapters::repositories::PostRepository,
	config::{Config, ConfigError},
	database::{connection_pool, DatabaseExecutor},
};

pub fn config() -> Result<&'static Config, ConfigError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

/// Postgres repository over a lazily connected pool. Must run inside the tokio runtime.
pub fn post_repository(config: &Config) -> PostRepository {
	PostRepository::new(DatabaseExecutor::new(connection_pool(&config.database)))
}
