use std::sync::{
	atomic::{AtomicBool, Ordering},
	Mutex,
};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::post::{NewPost, Post};

use super::TPostRepository;

/// Posts kept in memory, with a switch that makes every call fail as an
/// unreachable backend would.
#[derive(Debug)]
pub struct InMemoryPostRepository {
	posts: Mutex<Vec<Post>>,
	available: AtomicBool,
}

impl Default for InMemoryPostRepository {
	fn default() -> Self {
		Self {
			posts: Default::default(),
			available: AtomicBool::new(true),
		}
	}
}

impl InMemoryPostRepository {
	pub fn set_available(
		&self,
		available: bool,
	) {
		self.available.store(available, Ordering::SeqCst);
	}

	pub fn len(&self) -> usize {
		self.posts.lock().unwrap().len()
	}

	fn check_available(&self) -> Result<(), sqlx::Error> {
		if self.available.load(Ordering::SeqCst) {
			Ok(())
		} else {
			Err(sqlx::Error::PoolTimedOut)
		}
	}
}

#[async_trait]
impl TPostRepository for InMemoryPostRepository {
	async fn list_by_community(
		&self,
		community_id: &str,
	) -> Result<Vec<Post>, sqlx::Error> {
		self.check_available()?;
		let posts = self.posts.lock().unwrap();
		let mut found: Vec<Post> = posts.iter().filter(|post| post.community_id == community_id).cloned().collect();
		found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
		Ok(found)
	}

	async fn create(
		&self,
		post: NewPost,
	) -> Result<Post, sqlx::Error> {
		self.check_available()?;
		let mut posts = self.posts.lock().unwrap();

		// Strictly increasing timestamps, as a server default would give across commits.
		let mut created_at = Utc::now();
		if let Some(last) = posts.last() {
			if created_at <= last.created_at {
				created_at = last.created_at + Duration::microseconds(1);
			}
		}

		let post = Post {
			id: posts.len() as i64 + 1,
			community_id: post.community_id,
			title: post.title,
			content: post.content,
			media_url: post.media_url,
			created_at,
		};
		posts.push(post.clone());
		Ok(post)
	}
}
