mod posts;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::adapters::repositories::TPostRepository;

#[derive(Clone)]
pub struct AppState {
	pub posts: Arc<dyn TPostRepository>,
}

impl AppState {
	pub fn new(posts: impl TPostRepository + 'static) -> Self {
		Self { posts: Arc::new(posts) }
	}
}

pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route("/api/posts", get(posts::list_posts).post(posts::create_post))
		.with_state(state)
}
