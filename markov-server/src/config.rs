//! Command-line configuration, read once at startup.

use clap::Parser;

/// Markov text generation server
///
/// Learns from plain text posted to `/learn` and serves generated
/// text on `/generate`.
#[derive(Parser, Debug, Clone)]
#[command(name = "markov-server")]
#[command(version)]
#[command(about = "HTTP server learning and generating text with an n-gram chain", long_about = None)]
pub struct Config {
	/// Size of the ngrams to be processed when using learn
	#[arg(long, default_value_t = 3, env = "MARKOV_NGRAM", value_parser = clap::value_parser!(u32).range(1..))]
	pub ngram: u32,

	/// Max number of words on output when using generate
	#[arg(long, default_value_t = 100, env = "MARKOV_MAX_WORDS")]
	pub max_words: usize,

	/// Port for the server to listen on
	#[arg(short, long, default_value_t = 8080, env = "MARKOV_PORT", value_parser = clap::value_parser!(u16).range(1..))]
	pub port: u16,

	/// Address for the server to bind to
	#[arg(long, default_value = "0.0.0.0", env = "MARKOV_HOST")]
	pub host: String,

	/// Number of HTTP worker threads
	#[arg(long, default_value_t = num_cpus::get(), env = "MARKOV_WORKERS")]
	pub workers: usize,

	/// Log filter used when RUST_LOG is not set
	#[arg(long, default_value = "info", env = "MARKOV_LOG_LEVEL")]
	pub log_level: String,
}
