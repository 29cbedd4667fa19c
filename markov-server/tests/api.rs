use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::web::Bytes;
use actix_web::{web, App};
use markov_core::NGramChain;
use markov_server::{routes, Handlers};

async fn spawn_app(
	ngram: usize,
	max_words: usize,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
	let chain = NGramChain::new(ngram).expect("valid ngram size");
	test::init_service(
		App::new()
			.app_data(web::Data::new(Handlers::new(Arc::new(chain), max_words)))
			.configure(routes::<NGramChain>),
	)
	.await
}

fn learn(body: impl Into<Bytes>) -> actix_http::Request {
	TestRequest::post()
		.uri("/learn")
		.insert_header((CONTENT_TYPE, "text/plain"))
		.set_payload(body.into())
		.to_request()
}

fn generate() -> actix_http::Request {
	TestRequest::get().uri("/generate").to_request()
}

#[actix_web::test]
async fn generate_before_learning_is_empty() {
	let app = spawn_app(3, 100).await;

	let resp = test::call_service(&app, generate()).await;

	assert_eq!(resp.status(), StatusCode::OK);
	assert_eq!(test::read_body(resp).await, "");
}

#[actix_web::test]
async fn learned_text_is_generated_back() {
	let app = spawn_app(3, 100).await;

	let resp = test::call_service(&app, learn("the cat sat on the mat")).await;
	assert_eq!(resp.status(), StatusCode::OK);
	assert_eq!(test::read_body(resp).await, "");

	let body = test::call_and_read_body(&app, generate()).await;
	assert_eq!(body, "the cat sat on the mat");
}

#[actix_web::test]
async fn generated_text_is_bounded_by_max_words() {
	let app = spawn_app(2, 3).await;

	test::call_service(&app, learn("one two three four five six seven")).await;

	let body = test::call_and_read_body(&app, generate()).await;
	assert_eq!(body, "one two three");
}

#[actix_web::test]
async fn learning_accumulates_between_requests() {
	let app = spawn_app(2, 100).await;

	test::call_service(&app, learn("red green")).await;
	test::call_service(&app, learn("green blue")).await;

	let body = test::call_and_read_body(&app, generate()).await;
	assert!(body == "red green blue" || body == "green blue", "unexpected {body:?}");
}

#[actix_web::test]
async fn invalid_utf8_body_is_unprocessable() {
	let app = spawn_app(2, 100).await;

	let resp = test::call_service(&app, learn(Bytes::from_static(b"caf\xe9 au lait"))).await;
	assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

	let body = test::read_body(resp).await;
	let body = std::str::from_utf8(&body).expect("error body is text");
	assert!(body.starts_with("Error processing text: text is not valid UTF-8: "), "{body}");
	assert!(body.ends_with('\n'));

	let body = test::call_and_read_body(&app, generate()).await;
	assert_eq!(body, "");
}

#[actix_web::test]
async fn charset_parameter_is_rejected() {
	let app = spawn_app(2, 100).await;

	let req = TestRequest::post()
		.uri("/learn")
		.insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
		.set_payload("hello world")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
	assert_eq!(test::read_body(resp).await, "Invalid content type\n");

	let body = test::call_and_read_body(&app, generate()).await;
	assert_eq!(body, "");
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
	let app = spawn_app(2, 100).await;

	let req = TestRequest::get().uri("/unknown").to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
