#[cfg(test)]
mod tests {
    use crate::api::{Post, PostId};
    use crate::db::repositories::LocalRepository;
    use crate::db::services::{
        delete_post, get_all_posts, get_post_by_id, health_check, save_post, update_post,
    };

    fn create_post(title: &str, description: &str) -> Post {
        Post::new(title, description)
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();

        let result = health_check(&repo).await;
        assert!(result.is_ok());
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_get_all_posts_empty() {
        let repo = LocalRepository::new();

        let posts = get_all_posts(&repo).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = LocalRepository::new();

        let saved = save_post(&repo, create_post("first", "a post")).await.unwrap();
        assert!(saved.id.is_some());
        assert_eq!(saved.title, "first");
        assert_eq!(saved.description, "a post");
    }

    #[tokio::test]
    async fn test_save_and_get_all() {
        let repo = LocalRepository::new();

        save_post(&repo, create_post("one", "first post")).await.unwrap();
        save_post(&repo, create_post("two", "second post")).await.unwrap();

        let posts = get_all_posts(&repo).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "one");
        assert_eq!(posts[1].title, "two");
    }

    #[tokio::test]
    async fn test_get_all_orders_by_id() {
        let repo = LocalRepository::new();

        for title in ["a", "b", "c"] {
            save_post(&repo, create_post(title, "body")).await.unwrap();
        }

        let posts = get_all_posts(&repo).await.unwrap();
        let ids: Vec<i32> = posts.iter().map(|p| p.id.unwrap().value()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_get_post_by_id() {
        let repo = LocalRepository::new();

        let saved = save_post(&repo, create_post("lookup", "find me")).await.unwrap();
        let id = saved.id.unwrap();

        let found = get_post_by_id(&repo, id).await.unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.title, "lookup");
        assert_eq!(found.description, "find me");
    }

    #[tokio::test]
    async fn test_get_post_by_id_not_found() {
        let repo = LocalRepository::new();

        let result = get_post_by_id(&repo, PostId::new(999)).await;
        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Post with id 999 not found!");
    }

    #[tokio::test]
    async fn test_save_allows_empty_fields() {
        let repo = LocalRepository::new();

        let saved = save_post(&repo, create_post("", "")).await.unwrap();
        assert!(saved.id.is_some());
        assert_eq!(saved.title, "");
        assert_eq!(saved.description, "");
    }

    #[tokio::test]
    async fn test_update_post() {
        let repo = LocalRepository::new();

        let saved = save_post(&repo, create_post("before", "old text")).await.unwrap();
        let id = saved.id.unwrap();

        let updated = update_post(&repo, id, create_post("after", "new text"))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.title, "after");
        assert_eq!(updated.description, "new text");

        let fetched = get_post_by_id(&repo, id).await.unwrap();
        assert_eq!(fetched.title, "after");
        assert_eq!(fetched.description, "new text");
    }

    #[tokio::test]
    async fn test_update_keeps_path_id() {
        let repo = LocalRepository::new();

        let saved = save_post(&repo, create_post("original", "text")).await.unwrap();
        let id = saved.id.unwrap();

        // An id in the payload must not override the addressed record.
        let mut payload = create_post("renamed", "text");
        payload.id = Some(PostId::new(id.value() + 40));
        let updated = update_post(&repo, id, payload).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(get_all_posts(&repo).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_post_not_found() {
        let repo = LocalRepository::new();

        let result = update_post(&repo, PostId::new(999), create_post("x", "y")).await;
        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Post with id 999 not found!");

        // Nothing may be written when the target does not exist.
        assert!(get_all_posts(&repo).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_post() {
        let repo = LocalRepository::new();

        let saved = save_post(&repo, create_post("doomed", "to go")).await.unwrap();
        let id = saved.id.unwrap();

        delete_post(&repo, id).await.unwrap();

        assert!(get_all_posts(&repo).await.unwrap().is_empty());
        let result = get_post_by_id(&repo, id).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_post_not_found() {
        let repo = LocalRepository::new();

        let result = delete_post(&repo, PostId::new(999)).await;
        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Post with id 999 not found!");
    }

    #[tokio::test]
    async fn test_delete_leaves_other_posts() {
        let repo = LocalRepository::new();

        let first = save_post(&repo, create_post("keep", "stays")).await.unwrap();
        let second = save_post(&repo, create_post("drop", "goes")).await.unwrap();

        delete_post(&repo, second.id.unwrap()).await.unwrap();

        let posts = get_all_posts(&repo).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, first.id);
    }
}
