//! HTTP front-end for a text engine.
//!
//! Exposes two endpoints:
//! - `POST /learn` feeds a `text/plain` body to the engine
//! - `GET /generate` returns text generated from everything learned so far
//!
//! The handlers only see the engine through [`processor::SpeechProcessor`],
//! so any implementation can be plugged in; [`markov_core::NGramChain`] is
//! the production one.

/// Command-line configuration.
pub mod config;

/// Request validation and engine dispatch for `/learn` and `/generate`.
pub mod handlers;

/// Text engine capabilities required by the handlers.
pub mod processor;

pub use config::Config;
pub use handlers::{routes, Handlers};
pub use processor::SpeechProcessor;
