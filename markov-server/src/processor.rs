use std::fmt::Display;
use std::future::Future;
use std::io;
use std::string::FromUtf8Error;

use actix_web::web::Bytes;
use futures::{Stream, TryStreamExt};
use markov_core::{ChainError, NGramChain};
use thiserror::Error;

/// Capabilities the HTTP handlers need from a text engine.
///
/// Implementations own their accumulated state and must tolerate
/// `process_text` and `generate_random_text` being called concurrently.
pub trait SpeechProcessor {
	/// Error whose text is returned verbatim to the client.
	type Error: Display;

	/// Consumes the whole `text` stream and learns from it.
	fn process_text<S>(&self, text: S) -> impl Future<Output = Result<(), Self::Error>>
	where
		S: Stream<Item = io::Result<Bytes>> + Unpin;

	/// Generates text of roughly `max_words` words at most. Never fails.
	fn generate_random_text(&self, max_words: usize) -> String;
}

#[derive(Debug, Error)]
pub enum ProcessTextError {
	#[error("failed to read text: {0}")]
	Read(#[from] io::Error),

	#[error("text is not valid UTF-8: {0}")]
	Encoding(#[from] FromUtf8Error),

	#[error(transparent)]
	Chain(#[from] ChainError),
}

impl SpeechProcessor for NGramChain {
	type Error = ProcessTextError;

	async fn process_text<S>(&self, mut text: S) -> Result<(), Self::Error>
	where
		S: Stream<Item = io::Result<Bytes>> + Unpin,
	{
		let mut buffer = Vec::new();
		while let Some(chunk) = text.try_next().await? {
			buffer.extend_from_slice(&chunk);
		}

		let text = String::from_utf8(buffer)?;
		self.learn(&text)?;
		Ok(())
	}

	fn generate_random_text(&self, max_words: usize) -> String {
		self.generate(max_words)
	}
}
