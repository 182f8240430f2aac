use std::{net::SocketAddr, process::ExitCode, str::FromStr};

use axum::http::{HeaderValue, Method};
use community_posts::{
	config::Config,
	dependencies::{config, post_repository},
	routes::{create_routes, AppState},
};
use tower::ServiceBuilder;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
	println!("Environment Variable Is Being Set...");
	dotenv::dotenv().ok();

	let config = match config() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Invalid configuration: {err}");
			return ExitCode::FAILURE;
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	match serve(config).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			tracing::error!(error = %err, "Server stopped");
			ExitCode::FAILURE
		}
	}
}

async fn serve(config: &'static Config) -> Result<(), Box<dyn std::error::Error>> {
	// ! Connection
	tracing::info!(database = ?config.database, "Connections Are Being Pooled...");
	let state = AppState::new(post_repository(config));

	let origins = config
		.allow_origins()
		.map(HeaderValue::from_str)
		.collect::<Result<Vec<_>, _>>()?;

	let app = create_routes(state).layer(
		ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(origins))
				.allow_methods([Method::GET, Method::POST]),
		),
	);

	let addr = SocketAddr::from_str(&config.server_ip_port)?;
	tracing::info!(%addr, "Start Web Server...");
	axum::Server::bind(&addr).serve(app.into_make_service()).await?;
	Ok(())
}
