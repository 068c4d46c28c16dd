//! In-memory repository implementation.
//!
//! `LocalRepository` keeps posts in a `BTreeMap` guarded by a
//! `parking_lot::RwLock`. It backs unit tests and local development runs
//! where no Postgres instance is available, and is the default backend
//! (`local-repo` feature).
//!
//! Id assignment mirrors a `SERIAL` column: a monotonic counter starting
//! at 1, never reused within the process.
//!
//! A health flag ([`LocalRepository::set_healthy`]) simulates a lost
//! backend: data operations then fail with a connection error.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{Post, PostId};
use crate::db::repository::{ErrorContext, PostRepository, RepositoryError, RepositoryResult};

/// In-memory post store.
pub struct LocalRepository {
    inner: RwLock<Store>,
}

struct Store {
    // BTreeMap keeps find_all in ascending id order.
    posts: BTreeMap<i32, Post>,
    next_id: i32,
    healthy: bool,
}

fn unavailable(operation: &str) -> RepositoryError {
    RepositoryError::connection_with_context(
        "Local repository marked unavailable",
        ErrorContext::new(operation).with_entity("post"),
    )
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store {
                posts: BTreeMap::new(),
                next_id: 1,
                healthy: true,
            }),
        }
    }

    /// Flip the simulated backend availability.
    ///
    /// While unhealthy, `health_check` reports `Ok(false)` and every data
    /// operation fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.inner.write().healthy = healthy;
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.inner.read().healthy)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Post>> {
        let store = self.inner.read();
        if !store.healthy {
            return Err(unavailable("find_all"));
        }
        Ok(store.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        let store = self.inner.read();
        if !store.healthy {
            return Err(unavailable("find_by_id"));
        }
        Ok(store.posts.get(&id.value()).cloned())
    }

    async fn save(&self, post: &Post) -> RepositoryResult<Post> {
        let mut store = self.inner.write();
        if !store.healthy {
            return Err(unavailable("save_post"));
        }

        let id = match post.id {
            Some(id) => {
                // Saving with an explicit id must not let the counter hand
                // the same id out again later.
                if id.value() >= store.next_id {
                    store.next_id = id.value() + 1;
                }
                id
            }
            None => {
                let id = PostId::new(store.next_id);
                store.next_id += 1;
                id
            }
        };

        let stored = Post {
            id: Some(id),
            title: post.title.clone(),
            description: post.description.clone(),
        };
        store.posts.insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, post: &Post) -> RepositoryResult<()> {
        let mut store = self.inner.write();
        if !store.healthy {
            return Err(unavailable("delete_post"));
        }

        let id = post.id.ok_or_else(|| {
            RepositoryError::internal_with_context(
                "cannot delete a post that has no id",
                ErrorContext::new("delete_post").with_entity("post"),
            )
        })?;

        store.posts.remove(&id.value());
        Ok(())
    }
}
