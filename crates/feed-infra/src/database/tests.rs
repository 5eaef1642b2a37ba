use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

use feed_core::domain::{NewPost, Post};
use feed_core::error::RepoError;
use feed_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::SeaOrmPostRepository;

fn model(id: i64, author: &str, image_url: Option<&str>) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        author: author.to_owned(),
        content: "Content".to_owned(),
        image_url: image_url.map(str::to_owned),
        created_at: now.into(),
        modified_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(7, "alice", Some("https://example.com/a.png"))]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let post = repo.find_by_id(7).await.unwrap().unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.author, "alice");
    assert_eq!(post.image_url.as_deref(), Some("https://example.com/a.png"));
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    assert!(repo.find_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_returns_database_id() {
    let row = model(42, "bob", None);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row.clone()]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let created_at = row.created_at.into();

    let post = repo
        .insert(NewPost::new("bob".into(), "Content".into(), None, created_at))
        .await
        .unwrap();

    assert_eq!(post.id, 42);
    assert_eq!(post.created_at, post.modified_at);
}

#[tokio::test]
async fn test_delete_reports_whether_row_existed() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    assert!(repo.delete_by_id(3).await.unwrap());
    assert!(!repo.delete_by_id(3).await.unwrap());
}

#[tokio::test]
async fn test_update_of_vanished_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let now = Utc::now();
    let mut post = Post::from_new(9, NewPost::new("a".into(), "c".into(), None, now));
    post.touch(now + Duration::seconds(1));

    assert!(matches!(repo.update(post).await, Err(RepoError::NotFound)));
}

#[test]
fn test_list_orders_by_created_at_then_id() {
    let sql = SeaOrmPostRepository::newest_first()
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(
        sql.ends_with(r#"ORDER BY "posts"."created_at" DESC, "posts"."id" DESC"#),
        "unexpected query: {sql}"
    );
}
