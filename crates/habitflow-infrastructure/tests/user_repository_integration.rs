use habitflow_domain::habit::HabitRepository;
use habitflow_domain::journal::{JournalEntry, JournalRepository};
use habitflow_domain::user::{ShareCode, UserRepository};
use habitflow_domain::DomainError;
use habitflow_infrastructure::persistence::repositories::{
    SqliteHabitRepository, SqliteJournalRepository, SqliteUserRepository,
};

mod test_helpers;

#[tokio::test]
async fn user_repo_lookup_by_username_and_share_code() {
    let db = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(db.pool());
    let alice = test_helpers::insert_user(&db, "alice").await;

    let by_name = repo
        .find_by_username("alice")
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(by_name.id(), alice.id());

    let by_code = repo
        .find_by_share_code(alice.share_code())
        .await
        .unwrap()
        .expect("should exist");
    assert_eq!(by_code.username().as_str(), "alice");

    assert!(repo.share_code_exists(alice.share_code()).await.unwrap());
    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    let unused = ShareCode::from_string("HABIT-00000");
    assert!(!repo.share_code_exists(&unused).await.unwrap());
}

#[tokio::test]
async fn user_repo_duplicate_username_is_conflict() {
    let db = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(db.pool());
    let alice = test_helpers::insert_user(&db, "alice").await;

    let clone = habitflow_domain::user::User::new(
        alice.username().clone(),
        "hash".to_string(),
        ShareCode::generate(),
    );
    let err = repo.create(&clone).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn user_repo_friends_persist_in_order() {
    let db = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(db.pool());
    let alice = test_helpers::insert_user(&db, "alice").await;
    let bob = test_helpers::insert_user(&db, "bob").await;
    let carol = test_helpers::insert_user(&db, "carol").await;

    assert!(repo.add_friend(alice.id(), carol.id()).await.unwrap());
    assert!(repo.add_friend(alice.id(), bob.id()).await.unwrap());
    assert!(!repo.add_friend(alice.id(), bob.id()).await.unwrap());

    let stored = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(stored.friends(), &[carol.id().clone(), bob.id().clone()]);

    let friends = repo.find_by_ids(stored.friends()).await.unwrap();
    let names: Vec<&str> = friends.iter().map(|u| u.username().as_str()).collect();
    assert_eq!(names, vec!["carol", "bob"]);

    assert!(repo.remove_friend(alice.id(), carol.id()).await.unwrap());
    assert!(!repo.remove_friend(alice.id(), carol.id()).await.unwrap());
    let stored = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(stored.friends(), &[bob.id().clone()]);
}

#[tokio::test]
async fn user_repo_edits_from_stale_copies_do_not_revert_each_other() {
    let db = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(db.pool());
    let alice = test_helpers::insert_user(&db, "alice").await;
    let bob = test_helpers::insert_user(&db, "bob").await;
    let carol = test_helpers::insert_user(&db, "carol").await;

    // Three requests that each loaded alice before any of them wrote
    let for_password = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    let for_bob = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    let for_carol = repo.find_by_id(alice.id()).await.unwrap().unwrap();

    assert!(repo
        .replace_password_hash(for_password.id(), for_password.password_hash(), "$argon2id$NEW")
        .await
        .unwrap());
    assert!(repo.add_friend(for_bob.id(), bob.id()).await.unwrap());
    assert!(repo.add_friend(for_carol.id(), carol.id()).await.unwrap());

    let stored = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(stored.password_hash(), "$argon2id$NEW");
    assert_eq!(stored.friends(), &[bob.id().clone(), carol.id().clone()]);

    // A password change verified against the old hash no longer applies
    assert!(!repo
        .replace_password_hash(for_bob.id(), for_bob.password_hash(), "$argon2id$STALE")
        .await
        .unwrap());
    let stored = repo.find_by_id(alice.id()).await.unwrap().unwrap();
    assert_eq!(stored.password_hash(), "$argon2id$NEW");
}

#[tokio::test]
async fn user_repo_delete_cascades_to_owned_data() {
    let db = test_helpers::setup_in_memory_db().await;
    let users = SqliteUserRepository::new(db.pool());
    let habits = SqliteHabitRepository::new(db.pool());
    let journal = SqliteJournalRepository::new(db.pool());

    let alice = test_helpers::insert_user(&db, "alice").await;
    let bob = test_helpers::insert_user(&db, "bob").await;
    assert!(users.add_friend(bob.id(), alice.id()).await.unwrap());

    let mut habit = test_helpers::new_habit(alice.id(), "Meditate");
    habit
        .complete_today(test_helpers::key("2024-01-07"))
        .unwrap();
    habits.save(&habit).await.unwrap();
    let entry = JournalEntry::new(
        alice.id().clone(),
        test_helpers::key("2024-01-07"),
        Some("calm".to_string()),
        None,
    );
    journal.save(&entry).await.unwrap();

    assert!(users.delete(alice.id()).await.expect("delete user"));

    assert!(users.find_by_id(alice.id()).await.unwrap().is_none());
    assert!(habits.find_by_id(habit.id()).await.unwrap().is_none());
    assert!(journal.find_by_id(entry.id()).await.unwrap().is_none());
    let completions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM habit_completions")
        .fetch_one(&*db.pool())
        .await
        .unwrap();
    assert_eq!(completions, 0);

    let bob = users.find_by_id(bob.id()).await.unwrap().unwrap();
    assert!(bob.friends().is_empty());
}
