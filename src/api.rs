//! Public API surface for the posts backend.
//!
//! This file consolidates the entity types exchanged over the HTTP API and
//! stored through the repository layer. All types derive
//! Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Post identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostId(pub i32);

impl PostId {
    pub fn new(value: i32) -> Self {
        PostId(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PostId> for i32 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

/// A blog post.
///
/// `id` is `None` until the store assigns one on first save; after that it
/// is immutable. Serializes as `{"id": .., "title": .., "description": ..}`
/// (the newtype id flattens to a plain integer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<PostId>,
    pub title: String,
    pub description: String,
}

impl Post {
    /// Create a not-yet-persisted post (no id).
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
        }
    }
}
