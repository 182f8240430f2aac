use async_trait::async_trait;

use crate::{
	database::DatabaseExecutor,
	domain::post::{NewPost, Post},
};

use super::TPostRepository;

const LIST_BY_COMMUNITY: &str = "SELECT id, community_id, title, content, media_url, created_at \
	FROM posts WHERE community_id = $1 ORDER BY created_at DESC";

const INSERT: &str = "INSERT INTO posts (community_id, title, content, media_url) VALUES ($1, $2, $3, $4) \
	RETURNING id, community_id, title, content, media_url, created_at";

/// Postgres-backed posts store.
#[derive(Clone, Debug)]
pub struct PostRepository {
	executor: DatabaseExecutor,
}

impl PostRepository {
	pub fn new(executor: DatabaseExecutor) -> Self {
		Self { executor }
	}
}

#[async_trait]
impl TPostRepository for PostRepository {
	async fn list_by_community(
		&self,
		community_id: &str,
	) -> Result<Vec<Post>, sqlx::Error> {
		self.executor
			.fetch_all(sqlx::query_as::<_, Post>(LIST_BY_COMMUNITY).bind(community_id))
			.await
	}

	async fn create(
		&self,
		post: NewPost,
	) -> Result<Post, sqlx::Error> {
		self.executor
			.fetch_one(
				sqlx::query_as::<_, Post>(INSERT)
					.bind(post.community_id)
					.bind(post.title)
					.bind(post.content)
					.bind(post.media_url),
			)
			.await
	}
}
