//! Behavioural tests for the SQLite-backed user repository.
//!
//! Each test opens a fresh store in a temporary directory so cases stay
//! independent and the database file is removed with the directory.

use std::time::Duration;

use tempfile::TempDir;
use user_service::domain::ports::{UserRepository, UserRepositoryError};
use user_service::domain::{NewUser, UserPatch};
use user_service::outbound::persistence::{SqliteUserRepository, Store};
use uuid::Uuid;

fn open_repository() -> (TempDir, Store, SqliteUserRepository) {
    let dir = TempDir::new().expect("create temp dir");
    let store = Store::connect(dir.path().join("users.sqlite")).expect("open store");
    let repository = SqliteUserRepository::new(store.clone());
    (dir, store, repository)
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser { name: name.to_owned(), email: email.to_owned(), age: None, is_active: None }
}

#[tokio::test]
async fn create_generates_id_and_matching_timestamps() {
    let (_dir, _store, repository) = open_repository();

    let user = repository
        .create(NewUser { age: Some(30), ..new_user("Max", "max@example.com") })
        .await
        .expect("create user");

    assert_ne!(user.id, Uuid::nil());
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(user.name, "Max");
    assert_eq!(user.email, "max@example.com");
    assert_eq!(user.age, Some(30));
}

#[tokio::test]
async fn create_defaults_the_activity_flag_to_true() {
    let (_dir, _store, repository) = open_repository();

    let user = repository.create(new_user("Max", "max@example.com")).await.expect("create user");

    assert!(user.is_active);
}

#[tokio::test]
async fn create_honours_an_explicit_activity_flag() {
    let (_dir, _store, repository) = open_repository();

    let user = repository
        .create(NewUser { is_active: Some(false), ..new_user("Max", "max@example.com") })
        .await
        .expect("create user");

    assert!(!user.is_active);
}

#[tokio::test]
async fn create_with_duplicate_email_is_a_constraint_error() {
    let (_dir, _store, repository) = open_repository();

    repository.create(new_user("Max", "max@example.com")).await.expect("first create");
    let err = repository
        .create(new_user("Other Max", "max@example.com"))
        .await
        .expect_err("duplicate email is rejected");

    assert!(
        matches!(err, UserRepositoryError::Constraint { .. }),
        "expected constraint error, got {err:?}"
    );
}

#[tokio::test]
async fn absent_ids_yield_none_and_false_without_errors() {
    let (_dir, _store, repository) = open_repository();
    let missing = Uuid::new_v4();

    assert_eq!(repository.find_by_id(missing).await.expect("find_by_id"), None);
    assert_eq!(
        repository.update(missing, UserPatch::default()).await.expect("update"),
        None
    );
    assert!(!repository.delete(missing).await.expect("delete"));
}

#[tokio::test]
async fn find_by_id_returns_the_stored_record() {
    let (_dir, _store, repository) = open_repository();

    let created = repository.create(new_user("Max", "max@example.com")).await.expect("create");
    let found = repository
        .find_by_id(created.id)
        .await
        .expect("find_by_id")
        .expect("record exists");

    assert_eq!(found, created);
}

#[tokio::test]
async fn find_by_email_matches_the_unique_column() {
    let (_dir, _store, repository) = open_repository();

    let created = repository.create(new_user("Maria", "maria@example.com")).await.expect("create");

    let found = repository
        .find_by_email("maria@example.com")
        .await
        .expect("find_by_email")
        .expect("record exists");
    assert_eq!(found, created);

    assert_eq!(
        repository.find_by_email("absent@example.com").await.expect("find_by_email"),
        None
    );
}

#[tokio::test]
async fn update_merges_supplied_fields_and_refreshes_updated_at() {
    let (_dir, _store, repository) = open_repository();

    let created = repository
        .create(NewUser { age: Some(30), ..new_user("Max", "max@example.com") })
        .await
        .expect("create");

    // The refreshed timestamp must be strictly greater than the stored one.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let updated = repository
        .update(created.id, UserPatch { name: Some("Maximilian".to_owned()), ..UserPatch::default() })
        .await
        .expect("update")
        .expect("record exists");

    assert_eq!(updated.name, "Maximilian");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.age, created.age);
    assert_eq!(updated.is_active, created.is_active);
    assert_eq!(updated.created_at, created.created_at);
    assert!(
        updated.updated_at > created.updated_at,
        "updated_at should move forward: {} vs {}",
        updated.updated_at,
        created.updated_at
    );
}

#[tokio::test]
async fn update_can_change_every_mutable_field() {
    let (_dir, _store, repository) = open_repository();

    let created = repository.create(new_user("Max", "max@example.com")).await.expect("create");

    let updated = repository
        .update(
            created.id,
            UserPatch {
                name: Some("Maria".to_owned()),
                email: Some("maria@example.com".to_owned()),
                age: Some(28),
                is_active: Some(false),
            },
        )
        .await
        .expect("update")
        .expect("record exists");

    assert_eq!(updated.name, "Maria");
    assert_eq!(updated.email, "maria@example.com");
    assert_eq!(updated.age, Some(28));
    assert!(!updated.is_active);
}

#[tokio::test]
async fn delete_removes_the_row_and_reports_it() {
    let (_dir, _store, repository) = open_repository();

    let created = repository.create(new_user("Max", "max@example.com")).await.expect("create");

    assert!(repository.delete(created.id).await.expect("delete"));
    assert_eq!(repository.find_by_id(created.id).await.expect("find_by_id"), None);
    assert!(repository.find_all().await.expect("find_all").is_empty());
}

#[tokio::test]
async fn find_all_returns_every_stored_record() {
    let (_dir, _store, repository) = open_repository();

    for i in 1..=3 {
        repository
            .create(new_user(&format!("User {i}"), &format!("user{i}@example.com")))
            .await
            .expect("create");
    }

    assert_eq!(repository.find_all().await.expect("find_all").len(), 3);
}

#[tokio::test]
async fn find_active_filters_on_the_activity_flag() {
    let (_dir, _store, repository) = open_repository();

    repository.create(new_user("Max", "max@example.com")).await.expect("create");
    repository.create(new_user("Maria", "maria@example.com")).await.expect("create");
    let retired = repository.create(new_user("Rex", "rex@example.com")).await.expect("create");
    repository
        .update(retired.id, UserPatch { is_active: Some(false), ..UserPatch::default() })
        .await
        .expect("update")
        .expect("record exists");

    let active = repository.find_active().await.expect("find_active");
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|user| user.is_active));
}

#[tokio::test]
async fn find_sorted_by_age_orders_descending_with_unknown_ages_last() {
    let (_dir, _store, repository) = open_repository();

    for (name, email, age) in [
        ("Max", "max@example.com", Some(31)),
        ("Maria", "maria@example.com", Some(45)),
        ("Mia", "mia@example.com", Some(23)),
        ("Ageless", "ageless@example.com", None),
    ] {
        repository
            .create(NewUser {
                name: name.to_owned(),
                email: email.to_owned(),
                age,
                is_active: None,
            })
            .await
            .expect("create");
    }

    let sorted = repository.find_sorted_by_age().await.expect("find_sorted_by_age");
    let ages: Vec<Option<i32>> = sorted.iter().map(|user| user.age).collect();
    assert_eq!(ages, vec![Some(45), Some(31), Some(23), None]);
}

#[tokio::test]
async fn pagination_returns_the_requested_slice() {
    let (_dir, _store, repository) = open_repository();

    for i in 1..=25 {
        repository
            .create(new_user(&format!("User {i:02}"), &format!("user{i:02}@example.com")))
            .await
            .expect("create");
    }

    let page = repository.find_with_pagination(2, 10).await.expect("paginate");
    let emails: Vec<&str> = page.iter().map(|user| user.email.as_str()).collect();
    let expected: Vec<String> = (11..=20).map(|i| format!("user{i}@example.com")).collect();
    assert_eq!(emails, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn pagination_past_the_end_is_empty() {
    let (_dir, _store, repository) = open_repository();

    repository.create(new_user("Max", "max@example.com")).await.expect("create");

    let page = repository.find_with_pagination(5, 10).await.expect("paginate");
    assert!(page.is_empty());
}

#[tokio::test]
async fn operations_after_close_report_connection_errors() {
    let (_dir, store, repository) = open_repository();
    store.close();

    let err = repository.find_all().await.expect_err("closed store fails");
    assert!(
        matches!(err, UserRepositoryError::Connection { .. }),
        "expected connection error, got {err:?}"
    );
}
