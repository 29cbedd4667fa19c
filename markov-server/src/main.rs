use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use markov_core::NGramChain;
use markov_server::{routes, Config, Handlers};
use tracing_subscriber::EnvFilter;

/// Main entry point for the server.
///
/// Builds the n-gram chain shared by every worker and starts an
/// Actix-web HTTP server exposing `/learn` and `/generate`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Config::parse();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
		)
		.with_target(false)
		.init();

	let chain = NGramChain::new(config.ngram as usize).map_err(|e| {
		tracing::error!("error initialising text processor: {}", e);
		std::io::Error::other(format!("error initialising text processor: {e}"))
	})?;

	let handlers = web::Data::new(Handlers::new(Arc::new(chain), config.max_words));

	tracing::info!(
		ngram = config.ngram,
		max_words = config.max_words,
		workers = config.workers,
		"Listening on {}:{}",
		config.host,
		config.port
	);

	HttpServer::new(move || {
		App::new()
			.app_data(handlers.clone())
			.wrap(middleware::Logger::default())
			.configure(routes::<NGramChain>)
	})
		.workers(config.workers)
		.bind((config.host.as_str(), config.port))
		.inspect_err(|e| tracing::error!("error starting local server: {}", e))?
		.run()
		.await
}
