//! Tests for the in-memory LocalRepository.
//!
//! These cover id assignment, lookup and delete behavior, and concurrent
//! access through the repository trait.

use std::sync::Arc;

use posts_api::api::{Post, PostId};
use posts_api::db::repositories::LocalRepository;
use posts_api::db::repository::PostRepository;

fn unsaved_post(title: &str) -> Post {
    Post::new(title, format!("body of {}", title))
}

#[tokio::test]
async fn test_health_check_always_ok() {
    let repo = LocalRepository::new();
    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_save_assigns_sequential_ids() {
    let repo = LocalRepository::new();

    let first = repo.save(&unsaved_post("a")).await.unwrap();
    let second = repo.save(&unsaved_post("b")).await.unwrap();
    let third = repo.save(&unsaved_post("c")).await.unwrap();

    assert_eq!(first.id, Some(PostId::new(1)));
    assert_eq!(second.id, Some(PostId::new(2)));
    assert_eq!(third.id, Some(PostId::new(3)));
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let repo = LocalRepository::new();

    let found = repo.find_by_id(PostId::new(1)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_save_with_id_overwrites() {
    let repo = LocalRepository::new();

    let saved = repo.save(&unsaved_post("original")).await.unwrap();
    let id = saved.id.unwrap();

    let replacement = Post {
        id: Some(id),
        title: "replaced".to_string(),
        description: "new body".to_string(),
    };
    let updated = repo.save(&replacement).await.unwrap();
    assert_eq!(updated.id, Some(id));

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.title, "replaced");
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_explicit_id_does_not_get_reassigned() {
    let repo = LocalRepository::new();

    let explicit = Post {
        id: Some(PostId::new(5)),
        title: "pinned".to_string(),
        description: "at five".to_string(),
    };
    repo.save(&explicit).await.unwrap();

    // The id counter must skip past explicitly used ids.
    let next = repo.save(&unsaved_post("next")).await.unwrap();
    assert_eq!(next.id, Some(PostId::new(6)));
}

#[tokio::test]
async fn test_find_all_ascending_id_order() {
    let repo = LocalRepository::new();

    repo.save(&Post {
        id: Some(PostId::new(9)),
        title: "nine".to_string(),
        description: String::new(),
    })
    .await
    .unwrap();
    repo.save(&Post {
        id: Some(PostId::new(3)),
        title: "three".to_string(),
        description: String::new(),
    })
    .await
    .unwrap();

    let posts = repo.find_all().await.unwrap();
    let ids: Vec<i32> = posts.iter().map(|p| p.id.unwrap().value()).collect();
    assert_eq!(ids, vec![3, 9]);
}

#[tokio::test]
async fn test_delete_removes_post() {
    let repo = LocalRepository::new();

    let saved = repo.save(&unsaved_post("gone soon")).await.unwrap();
    repo.delete(&saved).await.unwrap();

    assert!(repo.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unsaved_post_fails() {
    let repo = LocalRepository::new();

    let result = repo.delete(&unsaved_post("never saved")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_concurrent_saves_get_unique_ids() {
    let repo = Arc::new(LocalRepository::new());

    let mut handles = vec![];
    for i in 0..10 {
        let repo_clone = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo_clone.save(&unsaved_post(&format!("post_{}", i))).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        let saved = handle.await.unwrap().unwrap();
        ids.push(saved.id.unwrap().value());
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
    assert_eq!(repo.find_all().await.unwrap().len(), 10);
}
