use diesel::prelude::*;

use super::schema::posts;
use crate::api::{Post, PostId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostRow {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub struct NewPostRow {
    pub title: String,
    pub description: String,
}

/// Update form: sets all mutable columns of an existing row.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = posts)]
pub struct PostChangeset {
    pub title: String,
    pub description: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: Some(PostId::new(row.id)),
            title: row.title,
            description: row.description,
        }
    }
}

impl From<&Post> for NewPostRow {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
        }
    }
}

impl From<&Post> for PostChangeset {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
        }
    }
}
