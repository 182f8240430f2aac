use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} has an invalid value: {value:?}")]
	Invalid { name: &'static str, value: String },
}

pub struct Config {
	/// Fallback tracing filter when `RUST_LOG` is not set
	pub log_level: String,

	/// Address the server is listening on
	pub server_ip_port: String,
	pub allow_origins: String,
	pub database: DatabaseConfig,
}

impl Config {
	pub fn new() -> Result<Config, ConfigError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from any key lookup, `std::env` in production.
	pub fn from_lookup(
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<Config, ConfigError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:3000".into());
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("http://localhost:3000,http://localhost:3001".to_string());

		Ok(Config {
			log_level,
			server_ip_port,
			allow_origins,
			database: DatabaseConfig::from_lookup(&lookup)?,
		})
	}

	pub fn allow_origins(&self) -> impl Iterator<Item = &str> {
		self.allow_origins.split(',').map(str::trim).filter(|origin| !origin.is_empty())
	}
}

#[derive(Clone)]
pub struct DatabaseConfig {
	pub host: String,
	pub port: u16,
	pub database: String,
	pub user: String,
	pub password: String,

	/// Relaxed-trust mode: traffic stays encrypted but the server certificate is not verified.
	pub accept_invalid_certs: bool,
	pub ssl_root_cert: Option<PathBuf>,

	pub max_connections: u32,
	pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
	fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let required = |name: &'static str| lookup(name).filter(|v| !v.is_empty()).ok_or(ConfigError::Missing(name));

		Ok(Self {
			host: lookup("PG_HOST").unwrap_or("localhost".to_string()),
			port: parse_or(lookup, "PG_PORT", 5432)?,
			database: required("PG_DATABASE")?,
			user: required("PG_USER")?,
			password: lookup("PG_PASSWORD").unwrap_or_default(),
			accept_invalid_certs: parse_or(lookup, "PG_ACCEPT_INVALID_CERTS", false)?,
			ssl_root_cert: lookup("PG_SSL_ROOT_CERT").filter(|v| !v.is_empty()).map(PathBuf::from),
			max_connections: parse_or(lookup, "PG_MAX_CONNECTIONS", 10)?,
			acquire_timeout_secs: parse_or(lookup, "PG_ACQUIRE_TIMEOUT_SECS", 5)?,
		})
	}

	pub fn connect_options(&self) -> PgConnectOptions {
		let ssl_mode = if self.accept_invalid_certs {
			PgSslMode::Require
		} else {
			PgSslMode::VerifyFull
		};

		let options = PgConnectOptions::new()
			.host(&self.host)
			.port(self.port)
			.database(&self.database)
			.username(&self.user)
			.password(&self.password)
			.ssl_mode(ssl_mode);

		match &self.ssl_root_cert {
			Some(path) => options.ssl_root_cert(path),
			None => options,
		}
	}
}

impl fmt::Debug for DatabaseConfig {
	fn fmt(
		&self,
		f: &mut fmt::Formatter<'_>,
	) -> fmt::Result {
		f.debug_struct("DatabaseConfig")
			.field("host", &self.host)
			.field("port", &self.port)
			.field("database", &self.database)
			.field("user", &self.user)
			.field("password", &"[REDACTED]")
			.field("accept_invalid_certs", &self.accept_invalid_certs)
			.field("ssl_root_cert", &self.ssl_root_cert)
			.field("max_connections", &self.max_connections)
			.field("acquire_timeout_secs", &self.acquire_timeout_secs)
			.finish()
	}
}

fn parse_or<T: FromStr>(
	lookup: &impl Fn(&str) -> Option<String>,
	name: &'static str,
	default: T,
) -> Result<T, ConfigError> {
	match lookup(name) {
		None => Ok(default),
		Some(value) if value.is_empty() => Ok(default),
		Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
	}
}
