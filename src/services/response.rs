use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

use crate::domain::post::entity::Post;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

#[derive(Debug)]
pub enum ServiceResponse {
	Posts(Vec<Post>),
	Created(Post),
}

impl From<Vec<Post>> for ServiceResponse {
	fn from(value: Vec<Post>) -> Self {
		ServiceResponse::Posts(value)
	}
}

impl From<Post> for ServiceResponse {
	fn from(value: Post) -> Self {
		ServiceResponse::Created(value)
	}
}

impl IntoResponse for ServiceResponse {
	fn into_response(self) -> Response {
		match self {
			ServiceResponse::Posts(posts) => (StatusCode::OK, Json(posts)).into_response(),
			ServiceResponse::Created(post) => (StatusCode::CREATED, Json(post)).into_response(),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("{0}")]
	Validation(&'static str),
	#[error("invalid JSON body: {0}")]
	MalformedInput(#[source] serde_json::Error),
	#[error("store error: {0}")]
	Store(#[from] sqlx::Error),
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServiceError::Validation(_) | ServiceError::MalformedInput(_) => StatusCode::BAD_REQUEST,
			ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Message handed to the caller. Store causes stay in the server log.
	pub fn public_message(&self) -> &'static str {
		match self {
			ServiceError::Validation(reason) => *reason,
			ServiceError::MalformedInput(_) => INVALID_JSON_BODY,
			ServiceError::Store(_) => INTERNAL_SERVER_ERROR,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub error: &'static str,
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		(self.status(), Json(ErrorBody { error: self.public_message() })).into_response()
	}
}
