//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Responses serialize [`Post`] directly since it already derives
//! Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::Post;

/// Request body for creating or updating a post.
///
/// Only `title` and `description` are read; an `id` field in the body is
/// ignored, the record identity comes from the URL (or is assigned by the
/// store on creation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    /// Post title
    pub title: String,
    /// Post description
    pub description: String,
}

impl PostPayload {
    /// Convert into an unpersisted [`Post`].
    pub fn into_post(self) -> Post {
        Post {
            id: None,
            title: self.title,
            description: self.description,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ignores_id_field() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"id": 42, "title": "t", "description": "d"}"#).unwrap();

        let post = payload.into_post();
        assert_eq!(post.id, None);
        assert_eq!(post.title, "t");
        assert_eq!(post.description, "d");
    }
}
