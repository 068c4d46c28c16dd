//! Postgres repository implementation using Diesel.
//!
//! Diesel is synchronous, so every statement runs on the tokio blocking
//! pool with a connection checked out of an r2d2 pool. One checkout per
//! operation, no retries: a failed statement surfaces directly as a
//! [`RepositoryError`].
//!
//! ## Expected schema
//!
//! The `posts` table is created and migrated externally to this service:
//!
//! ```sql
//! CREATE TABLE posts (
//!     id          SERIAL PRIMARY KEY,
//!     title       TEXT NOT NULL,
//!     description TEXT NOT NULL
//! );
//! ```
//!
//! ## Configuration
//!
//! Environment variables (see [`PostgresConfig::from_env`]):
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use log::debug;
use std::time::Duration;
use tokio::task;

use crate::api::{Post, PostId};
use crate::db::repository::{ErrorContext, PostRepository, RepositoryError, RepositoryResult};

mod models;
mod schema;

use models::{NewPostRow, PostChangeset, PostRow};
use schema::posts;

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
    /// - `PG_POOL_MAX`: Maximum pool size (default: 10)
    /// - `PG_POOL_MIN`: Minimum pool size (default: 1)
    /// - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
    /// - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let min_pool_size = std::env::var("PG_POOL_MIN")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_sec = std::env::var("PG_IDLE_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        Ok(Self {
            database_url,
            max_pool_size,
            min_pool_size,
            connection_timeout_sec,
            idle_timeout_sec,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository with a connection pool.
    ///
    /// # Arguments
    /// * `config` - Database configuration
    ///
    /// # Returns
    /// * `Ok(PostgresRepository)` on success
    /// * `Err(RepositoryError)` if the pool cannot be built
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true) // Validate connections before use
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        debug!(
            "Created Postgres connection pool (max_size={}, min_idle={})",
            config.max_pool_size, config.min_pool_size
        );

        Ok(Self { pool })
    }

    /// Run a synchronous database operation on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(RepositoryError::from)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    RepositoryError::from(err)
}

#[async_trait]
impl PostRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Post>> {
        self.with_conn(|conn| {
            let rows = posts::table
                .select(PostRow::as_select())
                .order(posts::id.asc())
                .load::<PostRow>(conn)
                .map_err(map_diesel_error)?;

            Ok(rows.into_iter().map(Post::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        self.with_conn(move |conn| {
            let row = posts::table
                .find(id.value())
                .select(PostRow::as_select())
                .first::<PostRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;

            Ok(row.map(Post::from))
        })
        .await
    }

    async fn save(&self, post: &Post) -> RepositoryResult<Post> {
        let post = post.clone();
        self.with_conn(move |conn| {
            let row = match post.id {
                None => diesel::insert_into(posts::table)
                    .values(NewPostRow::from(&post))
                    .returning(PostRow::as_returning())
                    .get_result::<PostRow>(conn)
                    .map_err(map_diesel_error)?,
                Some(id) => diesel::update(posts::table.find(id.value()))
                    .set(PostChangeset::from(&post))
                    .returning(PostRow::as_returning())
                    .get_result::<PostRow>(conn)
                    .map_err(map_diesel_error)?,
            };

            Ok(Post::from(row))
        })
        .await
    }

    async fn delete(&self, post: &Post) -> RepositoryResult<()> {
        let id = post.id.ok_or_else(|| {
            RepositoryError::internal_with_context(
                "cannot delete a post that has no id",
                ErrorContext::new("delete_post").with_entity("post"),
            )
        })?;

        self.with_conn(move |conn| {
            diesel::delete(posts::table.find(id.value()))
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }
}
