use serde_json::{Map, Number, Value};

use crate::services::response::ServiceError;

use super::entity::NewPost;

pub const COMMUNITY_ID_REQUIRED: &str = "Community ID is required";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Query string of `GET /api/posts`.
#[derive(Debug, Default)]
pub struct ListPosts {
	pub community_id: Option<String>,
}

impl ListPosts {
	/// Keeps the first `communityId` pair; repeated keys are not an error.
	pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
		Self {
			community_id: pairs
				.into_iter()
				.find(|(key, _)| key == "communityId")
				.map(|(_, value)| value),
		}
	}

	/// Returns the community id unchanged, rejecting an absent or empty one.
	pub fn validate(self) -> Result<String, ServiceError> {
		match self.community_id {
			Some(community_id) if !community_id.is_empty() => Ok(community_id),
			_ => Err(ServiceError::Validation(COMMUNITY_ID_REQUIRED)),
		}
	}
}

/// Body of `POST /api/posts`.
#[derive(Debug)]
pub struct CreatePost {
	body: Map<String, Value>,
}

impl CreatePost {
	pub fn from_slice(body: &[u8]) -> Result<Self, ServiceError> {
		let value: Value = serde_json::from_slice(body).map_err(ServiceError::MalformedInput)?;
		Ok(Self {
			body: match value {
				Value::Object(body) => body,
				// Any other JSON value carries none of the fields.
				_ => Map::new(),
			},
		})
	}

	pub fn validate(self) -> Result<NewPost, ServiceError> {
		let (Some(community_id), Some(title), Some(content)) = (
			self.required_text("communityId"),
			self.required_text("title"),
			self.required_text("content"),
		) else {
			return Err(ServiceError::Validation(MISSING_REQUIRED_FIELDS));
		};

		let media_url = match self.body.get("mediaUrl") {
			None | Some(Value::Null) => None,
			Some(value) => Some(column_text(value)),
		};

		Ok(NewPost {
			community_id,
			title,
			content,
			media_url,
		})
	}

	/// `null`, `false`, `""` and `0` count as missing.
	fn required_text(
		&self,
		field: &str,
	) -> Option<String> {
		let value = self.body.get(field)?;
		is_truthy(value).then(|| column_text(value))
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::String(text) => !text.is_empty(),
		Value::Number(number) => number.as_f64() != Some(0.0),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Text stored in a `TEXT` column: strings verbatim, scalars in their literal
/// form, arrays and objects as JSON.
fn column_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Number(number) => number_text(number),
		other => other.to_string(),
	}
}

/// Integral floats drop their fraction, so `1.0` is stored as `1`.
fn number_text(number: &Number) -> String {
	match number.as_f64() {
		Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
			format!("{float:.0}")
		}
		_ => number.to_string(),
	}
}
