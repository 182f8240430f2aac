pub mod commands;
pub mod entity;

pub use self::commands::{CreatePost, ListPosts};
pub use self::entity::{NewPost, Post};
