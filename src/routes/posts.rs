use axum::{
	body::Bytes,
	extract::{Query, State},
};
use axum_macros::debug_handler;

use crate::{
	domain::post::ListPosts,
	services::{
		handlers::PostHandler,
		response::{ServiceError, ServiceResponse},
	},
};

use super::AppState;

#[debug_handler]
pub(super) async fn list_posts(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::list_posts(ListPosts::from_pairs(pairs), state.posts)
		.await
		.map(ServiceResponse::from)
}

// The body is read raw so that unparsable JSON and a missing content type get our own 400.
#[debug_handler]
pub(super) async fn create_post(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::create_post(&body, state.posts).await.map(ServiceResponse::from)
}
