use std::sync::Arc;

use crate::{
	adapters::repositories::TPostRepository,
	domain::post::{CreatePost, ListPosts, Post},
};

use super::response::ServiceError;

pub struct PostHandler;
impl PostHandler {
	/// Lists the posts of one community, newest first.
	pub async fn list_posts(
		query: ListPosts,
		repository: Arc<dyn TPostRepository>,
	) -> Result<Vec<Post>, ServiceError> {
		let community_id = query.validate()?;

		repository.list_by_community(&community_id).await.map_err(|err| {
			tracing::error!(error = %err, community_id = %community_id, "Error fetching posts");
			ServiceError::Store(err)
		})
	}

	/// Parses and validates the raw body, then inserts the post.
	pub async fn create_post(
		body: &[u8],
		repository: Arc<dyn TPostRepository>,
	) -> Result<Post, ServiceError> {
		let command = CreatePost::from_slice(body).map_err(|err| {
			tracing::warn!(error = %err, "Error parsing JSON");
			err
		})?;
		let new_post = command.validate()?;

		let post = repository.create(new_post).await.map_err(|err| {
			tracing::error!(error = %err, "Error creating post");
			ServiceError::Store(err)
		})?;
		tracing::info!(post_id = post.id, community_id = %post.community_id, "Post created");
		Ok(post)
	}
}
