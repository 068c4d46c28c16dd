//! Service layer for post operations.
//!
//! These functions sit between the HTTP handlers and the repository trait
//! and implement the behavior the API promises: existence checks before
//! mutation, updates that only touch title/description, and the exact
//! user-facing not-found message.
//!
//! All functions are generic over the repository (`?Sized`, so
//! `&dyn PostRepository` works) and run against any backend.

use crate::api::{Post, PostId};
use crate::db::repository::{ErrorContext, PostRepository, RepositoryError, RepositoryResult};

fn post_not_found(operation: &str, id: PostId) -> RepositoryError {
    RepositoryError::not_found_with_context(
        format!("Post with id {} not found!", id),
        ErrorContext::new(operation)
            .with_entity("post")
            .with_entity_id(id),
    )
}

/// Check connectivity to the backing store.
pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: PostRepository + ?Sized,
{
    repo.health_check().await
}

/// Fetch all posts, in ascending id order. An empty store yields an empty vec.
pub async fn get_all_posts<R>(repo: &R) -> RepositoryResult<Vec<Post>>
where
    R: PostRepository + ?Sized,
{
    repo.find_all().await
}

/// Fetch one post by id.
///
/// # Errors
/// `RepositoryError::NotFound` with message `"Post with id {id} not found!"`
/// when no such post exists.
pub async fn get_post_by_id<R>(repo: &R, id: PostId) -> RepositoryResult<Post>
where
    R: PostRepository + ?Sized,
{
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found("get_post_by_id", id))
}

/// Persist a post. No content validation: empty title/description are stored
/// as-is. A post without an id is inserted and gets one from the store.
pub async fn save_post<R>(repo: &R, post: Post) -> RepositoryResult<Post>
where
    R: PostRepository + ?Sized,
{
    repo.save(&post).await
}

/// Delete one post by id.
///
/// The existence check runs here, before the gateway delete: the not-found
/// failure (and its message) is a service guarantee and never depends on
/// the store reporting zero rows affected.
///
/// # Errors
/// `RepositoryError::NotFound` when no such post exists; the delete is not
/// attempted in that case.
pub async fn delete_post<R>(repo: &R, id: PostId) -> RepositoryResult<()>
where
    R: PostRepository + ?Sized,
{
    let post = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found("delete_post", id))?;

    repo.delete(&post).await
}

/// Update an existing post in place.
///
/// Only `title` and `description` are taken from `post`; the stored record
/// keeps its id (any id on `post` is ignored).
///
/// # Errors
/// `RepositoryError::NotFound` when no post with `id` exists; nothing is
/// saved in that case.
pub async fn update_post<R>(repo: &R, id: PostId, post: Post) -> RepositoryResult<Post>
where
    R: PostRepository + ?Sized,
{
    let mut existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found("update_post", id))?;

    existing.title = post.title;
    existing.description = post.description;

    repo.save(&existing).await
}
