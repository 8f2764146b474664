use std::time::Duration;

use registry::prelude::*;
use registry::users::{self, NewUser, User};
use registry::Config;

async fn setup_database() -> Database {
    let config = Config {
        max_connections: 1,
        ..Config::default()
    }
    .with_database_url("sqlite::memory:");
    let database = Database::connect(&config).expect("failed to init database");
    database.migrate().await.expect("failed to migrate");
    database
}

#[derive(Model, FromRow, Clone, Debug, Default)]
#[model(table = "notes")]
struct Note {
    #[field(primary_key = true, auto = true)]
    id: Integer,
    #[field(size = 50)]
    title: String,
    body: Option<Text>,
}

#[tokio::test]
async fn test_main() {
    let database = setup_database().await;

    // Create
    let r = User::create(kwargs!(name = "John", email = "john@example.com"), &database).await;
    assert!(r.is_ok(), "{:?}", r);
    let id = User {
        name: "Doe".to_string(),
        email: "doe@example.com".to_string(),
        ..Default::default()
    }
    .save(&database)
    .await
    .unwrap();
    assert_eq!(id, Some(2));

    // All, in key order
    let users = User::all(&database).await.unwrap();
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["John", "Doe"]);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].email, "john@example.com");

    // Filter
    let users = User::filter(kwargs!(name = "Doe"), &database).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 2);

    let users = User::filter(kwargs!(id == 1).or(kwargs!(name like "D%")), &database)
        .await
        .unwrap();
    assert_eq!(users.len(), 2);

    let users = User::filter(kwargs!(id > 1).and(kwargs!(name = "John")), &database)
        .await
        .unwrap();
    assert!(users.is_empty());

    // Count
    assert_eq!(User::count(&database).await.unwrap(), 2);
}

#[tokio::test]
async fn test_create_returns_generated_key() {
    let database = setup_database().await;

    let id = User::create(kwargs!(name = "John", email = "john@example.com"), &database)
        .await
        .unwrap();
    assert_eq!(id, Some(1));

    let user = users::register(
        &database,
        NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(User::filter(kwargs!(id = user.id), &database).await.unwrap(), [user]);
}

#[tokio::test]
async fn test_nullable_columns() {
    let database = setup_database().await;

    Note::create(kwargs!(title = "draft", body = None::<String>), &database)
        .await
        .unwrap();
    Note {
        title: "final".to_string(),
        body: Some("done".to_string()),
        ..Default::default()
    }
    .save(&database)
    .await
    .unwrap();

    let notes = Note::all(&database).await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].body, None);
    assert_eq!(notes[1].body.as_deref(), Some("done"));

    let notes = Note::filter(kwargs!(title != "draft"), &database).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "final");
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let database = setup_database().await;
    User::create(kwargs!(name = "Kept", email = "kept@example.com"), &database)
        .await
        .unwrap();

    database.migrate().await.unwrap();
    assert_eq!(User::count(&database).await.unwrap(), 1);
}

#[tokio::test]
async fn test_unreachable_database_is_a_connection_error() {
    let config = Config {
        max_connections: 1,
        acquire_timeout: Duration::from_secs(1),
        ..Config::default()
    }
    .with_database_url("sqlite:/nonexistent-registry-dir/registry.db");
    let database = Database::connect(&config).unwrap();

    let result = User::all(&database).await;
    assert!(matches!(result, Err(Error::Connection(_))), "{:?}", result);
}

#[tokio::test]
async fn test_migrate_until_ready() {
    let config = Config {
        max_connections: 1,
        ..Config::default()
    }
    .with_database_url("sqlite::memory:");
    let database = Database::connect(&config).unwrap();

    database
        .migrate_until_ready(3, Duration::from_millis(10))
        .await
        .unwrap();
    assert_eq!(User::count(&database).await.unwrap(), 0);
}

#[tokio::test]
async fn test_migrate_until_ready_gives_up() {
    let config = Config {
        max_connections: 1,
        acquire_timeout: Duration::from_millis(200),
        ..Config::default()
    }
    .with_database_url("sqlite:/nonexistent-registry-dir/registry.db");
    let database = Database::connect(&config).unwrap();

    let result = database
        .migrate_until_ready(2, Duration::from_millis(10))
        .await;
    assert!(matches!(result, Err(Error::Connection(_))), "{:?}", result);
}

#[test]
fn test_unsupported_url() {
    let config = Config::default().with_database_url("redis://cache");
    let result = Database::connect(&config);
    assert!(matches!(result, Err(Error::UnsupportedUrl(_))));
}
