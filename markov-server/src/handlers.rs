use std::io;
use std::sync::Arc;

use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use futures::TryStreamExt;

use crate::processor::SpeechProcessor;

const TEXT_PLAIN_CONTENT_TYPE: &str = "text/plain";

/// Resources shared by every request: the text engine and the
/// configured upper bound on generated words.
pub struct Handlers<P> {
	processor: Arc<P>,
	max_words: usize,
}

impl<P> Handlers<P> {
	pub fn new(processor: Arc<P>, max_words: usize) -> Self {
		Self { processor, max_words }
	}
}

/// Registers `/learn` and `/generate` for every method.
///
/// Method validation happens inside the handlers so that wrong methods
/// get the same plain-text error as any other rejected request.
pub fn routes<P>(cfg: &mut web::ServiceConfig)
where
	P: SpeechProcessor + 'static,
{
	cfg.service(web::resource("/learn").to(learn::<P>))
		.service(web::resource("/generate").to(generate::<P>));
}

/// Plain-text error response, message terminated by a newline.
fn http_error(status: StatusCode, message: &str) -> HttpResponse {
	HttpResponse::build(status)
		.content_type(ContentType::plaintext())
		.insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
		.body(format!("{message}\n"))
}

/// `/learn`
///
/// Feeds the request body to the text engine. Only `POST` requests with a
/// `Content-Type` of exactly `text/plain` are accepted.
pub async fn learn<P>(
	handlers: web::Data<Handlers<P>>,
	req: HttpRequest,
	body: web::Payload,
) -> HttpResponse
where
	P: SpeechProcessor + 'static,
{
	if req.method() != Method::POST {
		tracing::debug!(method = %req.method(), "rejected learn request");
		return http_error(StatusCode::METHOD_NOT_ALLOWED, "Invalid method");
	}

	// If it's not text plain, don't process it
	let content_type = req.headers().get(header::CONTENT_TYPE).and_then(|value| value.to_str().ok());
	if content_type != Some(TEXT_PLAIN_CONTENT_TYPE) {
		tracing::debug!(content_type = ?content_type, "rejected learn request");
		return http_error(StatusCode::UNPROCESSABLE_ENTITY, "Invalid content type");
	}

	let text = body.map_err(io::Error::other);
	if let Err(e) = handlers.processor.process_text(text).await {
		tracing::warn!(error = %e, "failed to process text");
		return http_error(StatusCode::UNPROCESSABLE_ENTITY, &format!("Error processing text: {e}"));
	}

	HttpResponse::Ok().finish()
}

/// `/generate`
///
/// Returns text generated from everything learned since the process started.
pub async fn generate<P>(handlers: web::Data<Handlers<P>>, req: HttpRequest) -> HttpResponse
where
	P: SpeechProcessor + 'static,
{
	if req.method() != Method::GET {
		tracing::debug!(method = %req.method(), "rejected generate request");
		return http_error(StatusCode::METHOD_NOT_ALLOWED, "Invalid method");
	}

	let text = handlers.processor.generate_random_text(handlers.max_words);

	HttpResponse::Ok()
		.content_type(ContentType::plaintext())
		.body(text)
}
