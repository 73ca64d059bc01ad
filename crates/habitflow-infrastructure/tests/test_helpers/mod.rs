#![allow(dead_code)]

use habitflow_domain::habit::{Habit, HabitPlan, Schedule};
use habitflow_domain::user::{ShareCode, User, UserRepository, Username};
use habitflow_domain::{DateKey, UserId};
use habitflow_infrastructure::persistence::repositories::SqliteUserRepository;
use habitflow_infrastructure::Database;

/// Fresh migrated in-memory database.
pub async fn setup_in_memory_db() -> Database {
    let db = Database::in_memory().await.expect("open in-memory db");
    db.run_migrations().await.expect("run migrations");
    db
}

pub async fn insert_user(db: &Database, name: &str) -> User {
    let user = User::new(
        Username::parse(name).expect("valid username"),
        "$argon2id$placeholder".to_string(),
        ShareCode::generate(),
    );
    SqliteUserRepository::new(db.pool())
        .create(&user)
        .await
        .expect("create user");
    user
}

pub fn new_habit(user_id: &UserId, name: &str) -> Habit {
    Habit::new(
        user_id.clone(),
        name.to_string(),
        None,
        HabitPlan::default(),
        Schedule::every_day(),
    )
    .expect("valid habit")
}

pub fn key(s: &str) -> DateKey {
    DateKey::parse(s).expect("valid date key")
}
