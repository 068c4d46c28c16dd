//! Post repository trait, the persistence gateway for [`Post`] records.
//!
//! This trait exposes exactly the CRUD operations the service layer needs:
//! find-all, find-by-id, save, delete, plus a connectivity check. Existence
//! checks and the not-found failure live in the service layer
//! ([`crate::db::services`]), not here: `find_by_id` reports absence as
//! `Ok(None)`, never as an error.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Post, PostId};

/// Repository trait for post storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Check that the backing store is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` - The store answered
    /// * `Err(RepositoryError)` - Connectivity failure
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch every stored post, in ascending id order.
    ///
    /// # Returns
    /// * `Ok(Vec<Post>)` - All posts (possibly empty)
    /// * `Err(RepositoryError)` - If the query fails
    async fn find_all(&self) -> RepositoryResult<Vec<Post>>;

    /// Fetch a single post by id.
    ///
    /// # Arguments
    /// * `id` - The post's primary key
    ///
    /// # Returns
    /// * `Ok(Some(Post))` - The stored post
    /// * `Ok(None)` - No post with that id
    /// * `Err(RepositoryError)` - If the query fails
    async fn find_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;

    /// Persist a post.
    ///
    /// Inserts when `post.id` is `None` (the store assigns the id);
    /// otherwise updates all fields of the row with that id.
    ///
    /// # Arguments
    /// * `post` - The post to store
    ///
    /// # Returns
    /// * `Ok(Post)` - The stored post, id always set
    /// * `Err(RepositoryError)` - If the statement fails
    async fn save(&self, post: &Post) -> RepositoryResult<Post>;

    /// Remove a post by identity.
    ///
    /// # Arguments
    /// * `post` - A previously fetched post; its id selects the row
    ///
    /// # Returns
    /// * `Ok(())` - The row is gone
    /// * `Err(RepositoryError)` - If `post` has no id or the statement fails
    async fn delete(&self, post: &Post) -> RepositoryResult<()>;
}
