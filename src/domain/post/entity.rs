use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `posts` table, serialized with its column names.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub community_id: String,
	pub title: String,
	pub content: String,
	pub media_url: Option<String>,
	pub created_at: DateTime<Utc>,
}

/// Validated input for an insert. `id` and `created_at` are assigned by the store.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewPost {
	pub community_id: String,
	pub title: String,
	pub content: String,
	pub media_url: Option<String>,
}
