pub(crate) mod post_repository;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::domain::post::{NewPost, Post};

pub use self::post_repository::PostRepository;

/// Store seam for posts. Each call is one statement, no transaction spans calls.
#[async_trait]
pub trait TPostRepository: Send + Sync {
	/// Posts of `community_id`, newest first.
	async fn list_by_community(
		&self,
		community_id: &str,
	) -> Result<Vec<Post>, sqlx::Error>;

	async fn create(
		&self,
		post: NewPost,
	) -> Result<Post, sqlx::Error>;
}
