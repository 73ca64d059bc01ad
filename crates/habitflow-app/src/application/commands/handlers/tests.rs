use std::collections::HashMap;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::friend_commands::*;
use crate::application::commands::habit_commands::*;
use crate::application::commands::handlers::*;
use crate::application::commands::journal_commands::*;
use crate::application::commands::user_commands::*;
use habitflow_domain::calendar::FixedClock;
use habitflow_domain::habit::{Habit, HabitRepository};
use habitflow_domain::journal::{JournalEntry, JournalRepository};
use habitflow_domain::shared::{DomainError, HabitId, JournalEntryId, UserId};
use habitflow_domain::user::{CredentialHasher, ShareCode, User, UserRepository};
use habitflow_domain::{DateInput, DateKey};

// Mock repositories and services for testing

struct MockUserRepository {
    users: tokio::sync::RwLock<HashMap<String, User>>,
}

impl MockUserRepository {
    fn new() -> Self {
        Self {
            users: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.id().as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.username().as_str() == username)
            .cloned())
    }

    async fn find_by_share_code(&self, code: &ShareCode) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.share_code() == code).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| users.get(id.as_str()).cloned())
            .collect())
    }

    async fn share_code_exists(&self, code: &ShareCode) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.share_code() == code))
    }

    async fn add_friend(&self, user_id: &UserId, friend_id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users
            .get_mut(user_id.as_str())
            .map(|u| u.add_friend(friend_id).is_ok())
            .unwrap_or(false))
    }

    async fn remove_friend(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users
            .get_mut(user_id.as_str())
            .map(|u| u.remove_friend(friend_id))
            .unwrap_or(false))
    }

    async fn replace_password_hash(
        &self,
        user_id: &UserId,
        expected: &str,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(user_id.as_str()) {
            Some(user) if user.password_hash() == expected => {
                user.change_password_hash(password_hash.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(id.as_str()).is_some())
    }
}

struct MockHabitRepository {
    habits: tokio::sync::RwLock<HashMap<String, Habit>>,
    // Number of upcoming completion writes that lose a version race
    conflicts: tokio::sync::RwLock<u32>,
}

impl MockHabitRepository {
    fn new() -> Self {
        Self {
            habits: tokio::sync::RwLock::new(HashMap::new()),
            conflicts: tokio::sync::RwLock::new(0),
        }
    }

    async fn inject_conflicts(&self, n: u32) {
        *self.conflicts.write().await = n;
    }
}

#[async_trait::async_trait]
impl HabitRepository for MockHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.insert(habit.id().as_str().to_string(), habit.clone());
        Ok(())
    }

    async fn save_completions(&self, habit: &Habit) -> Result<i64, DomainError> {
        {
            let mut conflicts = self.conflicts.write().await;
            if *conflicts > 0 {
                *conflicts -= 1;
                return Err(DomainError::ConcurrentModification(
                    "version changed".to_string(),
                ));
            }
        }

        let mut habits = self.habits.write().await;
        let stored = habits
            .get(habit.id().as_str())
            .ok_or_else(|| DomainError::HabitNotFound(habit.id().to_string()))?;
        if stored.version() != habit.version() {
            return Err(DomainError::ConcurrentModification(
                "version changed".to_string(),
            ));
        }

        let mut updated = habit.clone();
        updated.set_version(habit.version() + 1);
        let version = updated.version();
        habits.insert(habit.id().as_str().to_string(), updated);
        Ok(version)
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.get(id.as_str()).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        let mut owned: Vec<Habit> = habits
            .values()
            .filter(|h| h.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|h| std::cmp::Reverse(h.created_at()));
        Ok(owned)
    }

    async fn delete(&self, id: &HabitId) -> Result<bool, DomainError> {
        let mut habits = self.habits.write().await;
        Ok(habits.remove(id.as_str()).is_some())
    }
}

struct MockJournalRepository {
    entries: tokio::sync::RwLock<HashMap<String, JournalEntry>>,
}

impl MockJournalRepository {
    fn new() -> Self {
        Self {
            entries: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl JournalRepository for MockJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.id().as_str().to_string(), entry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &JournalEntryId) -> Result<Option<JournalEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(id.as_str()).cloned())
    }

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: DateKey,
    ) -> Result<Option<JournalEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .find(|e| e.user_id() == user_id && e.date() == date)
            .cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut owned: Vec<JournalEntry> = entries
            .values()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|e| std::cmp::Reverse(e.date()));
        Ok(owned)
    }

    async fn delete(&self, id: &JournalEntryId) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(id.as_str()).is_some())
    }
}

struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

fn key(s: &str) -> DateKey {
    DateKey::parse(s).unwrap()
}

fn clock_on(day: &str) -> Arc<FixedClock> {
    Arc::new(FixedClock::on(key(day)))
}

async fn register(repo: &Arc<MockUserRepository>, username: &str) -> String {
    let handler = RegisterUserCommandHandler::new(repo.clone(), Arc::new(PlainHasher));
    handler
        .handle(RegisterUserCommand {
            username: username.to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap()
        .user_id
}

async fn create_habit(
    habits: &Arc<MockHabitRepository>,
    users: &Arc<MockUserRepository>,
    user_id: &str,
) -> String {
    let handler = CreateHabitCommandHandler::new(habits.clone(), users.clone());
    handler
        .handle(CreateHabitCommand {
            user_id: user_id.to_string(),
            name: "Read".to_string(),
            description: None,
            cue_time: Some("07:30".to_string()),
            cue_location: None,
            stack_after: None,
            tiny_version: Some("One page".to_string()),
            frequency: None,
        })
        .await
        .unwrap()
        .id
}

// Users

#[tokio::test]
async fn test_register_and_login() {
    let users = Arc::new(MockUserRepository::new());
    let user_id = register(&users, "alice").await;

    let saved = users
        .find_by_id(&UserId::from_string(&user_id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.password_hash(), "hashed:secret123");
    assert!(saved.share_code().as_str().starts_with("HABIT-"));

    let login = LoginCommandHandler::new(users.clone(), Arc::new(PlainHasher));
    let dto = login
        .handle(LoginCommand {
            username: "alice".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(dto.user_id, user_id);

    let wrong = login
        .handle(LoginCommand {
            username: "alice".to_string(),
            password: "nope-nope".to_string(),
        })
        .await;
    assert!(matches!(wrong, Err(DomainError::InvalidCredentials(_))));

    let unknown = login
        .handle(LoginCommand {
            username: "bob".to_string(),
            password: "secret123".to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(DomainError::InvalidCredentials(_))));
}

#[tokio::test]
async fn test_register_rejects_duplicates_and_bad_input() {
    let users = Arc::new(MockUserRepository::new());
    register(&users, "alice").await;
    let handler = RegisterUserCommandHandler::new(users.clone(), Arc::new(PlainHasher));

    let duplicate = handler
        .handle(RegisterUserCommand {
            username: "alice".to_string(),
            password: "secret123".to_string(),
        })
        .await;
    assert!(matches!(duplicate, Err(DomainError::Conflict(_))));

    let short_password = handler
        .handle(RegisterUserCommand {
            username: "carol".to_string(),
            password: "123".to_string(),
        })
        .await;
    assert!(matches!(short_password, Err(DomainError::Validation(_))));

    let bad_name = handler
        .handle(RegisterUserCommand {
            username: "no spaces".to_string(),
            password: "secret123".to_string(),
        })
        .await;
    assert!(matches!(bad_name, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_friend_and_password_changes_on_one_user_are_all_kept() {
    let users = Arc::new(MockUserRepository::new());
    let alice = register(&users, "alice").await;
    let mut codes = Vec::new();
    for name in ["bob", "carol"] {
        let id = register(&users, name).await;
        let friend = users
            .find_by_id(&UserId::from_string(&id))
            .await
            .unwrap()
            .unwrap();
        codes.push(friend.share_code().to_string());
    }

    let add = AddFriendCommandHandler::new(users.clone());
    let change = ChangePasswordCommandHandler::new(users.clone(), Arc::new(PlainHasher));
    let (first, second, changed) = tokio::join!(
        add.handle(AddFriendCommand {
            user_id: alice.clone(),
            share_code: codes[0].clone(),
        }),
        add.handle(AddFriendCommand {
            user_id: alice.clone(),
            share_code: codes[1].clone(),
        }),
        change.handle(ChangePasswordCommand {
            user_id: alice.clone(),
            current_password: "secret123".to_string(),
            new_password: "another1".to_string(),
        }),
    );
    first.unwrap();
    second.unwrap();
    changed.unwrap();

    let stored = users
        .find_by_id(&UserId::from_string(&alice))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.password_hash(), "hashed:another1");
    assert_eq!(stored.friends().len(), 2);
}

#[tokio::test]
async fn test_change_password_requires_current() {
    let users = Arc::new(MockUserRepository::new());
    let user_id = register(&users, "alice").await;
    let handler = ChangePasswordCommandHandler::new(users.clone(), Arc::new(PlainHasher));

    let wrong = handler
        .handle(ChangePasswordCommand {
            user_id: user_id.clone(),
            current_password: "guess".to_string(),
            new_password: "another1".to_string(),
        })
        .await;
    assert!(matches!(wrong, Err(DomainError::InvalidCredentials(_))));

    handler
        .handle(ChangePasswordCommand {
            user_id: user_id.clone(),
            current_password: "secret123".to_string(),
            new_password: "another1".to_string(),
        })
        .await
        .unwrap();

    let saved = users
        .find_by_id(&UserId::from_string(&user_id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.password_hash(), "hashed:another1");
}

#[tokio::test]
async fn test_delete_user_checks_password() {
    let users = Arc::new(MockUserRepository::new());
    let habits = Arc::new(MockHabitRepository::new());
    let user_id = register(&users, "alice").await;
    create_habit(&habits, &users, &user_id).await;

    let handler =
        DeleteUserCommandHandler::new(users.clone(), habits.clone(), Arc::new(PlainHasher));

    let wrong = handler
        .handle(DeleteUserCommand {
            user_id: user_id.clone(),
            password: "guess".to_string(),
        })
        .await;
    assert!(matches!(wrong, Err(DomainError::InvalidCredentials(_))));

    let result = handler
        .handle(DeleteUserCommand {
            user_id: user_id.clone(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.habits_removed, 1);
    assert!(users
        .find_by_id(&UserId::from_string(&user_id))
        .await
        .unwrap()
        .is_none());
}

// Habits

#[tokio::test]
async fn test_create_habit_requires_existing_user() {
    let users = Arc::new(MockUserRepository::new());
    let habits = Arc::new(MockHabitRepository::new());
    let handler = CreateHabitCommandHandler::new(habits.clone(), users.clone());

    let result = handler
        .handle(CreateHabitCommand {
            user_id: UserId::new().to_string(),
            name: "Read".to_string(),
            description: None,
            cue_time: None,
            cue_location: None,
            stack_after: None,
            tiny_version: None,
            frequency: None,
        })
        .await;
    assert!(matches!(result, Err(DomainError::UserNotFound(_))));
}

#[tokio::test]
async fn test_create_habit_normalizes_fields() {
    let users = Arc::new(MockUserRepository::new());
    let habits = Arc::new(MockHabitRepository::new());
    let user_id = register(&users, "alice").await;
    let handler = CreateHabitCommandHandler::new(habits.clone(), users.clone());

    let dto = handler
        .handle(CreateHabitCommand {
            user_id,
            name: "  Stretch  ".to_string(),
            description: Some("after waking".to_string()),
            cue_time: Some(" 06:45:00 extra ".to_string()),
            cue_location: Some(" bedroom ".to_string()),
            stack_after: None,
            tiny_version: None,
            frequency: Some(vec![4, 0, 9, 0]),
        })
        .await
        .unwrap();

    assert_eq!(dto.name, "Stretch");
    assert_eq!(dto.cue_time, "06:45:00");
    assert_eq!(dto.cue_location, "bedroom");
    assert_eq!(dto.stack_after, "");
    assert_eq!(dto.frequency, vec![0, 4]);
    assert_eq!(dto.frequency_label, "Mon, Fri (2x/week)");
    assert_eq!(dto.current_streak, 0);
    assert!(dto.completions.is_empty());
}

#[tokio::test]
async fn test_update_habit_keeps_absent_plan_fields() {
    let users = Arc::new(MockUserRepository::new());
    let habits = Arc::new(MockHabitRepository::new());
    let user_id = register(&users, "alice").await;
    let habit_id = create_habit(&habits, &users, &user_id).await;

    let handler = UpdateHabitCommandHandler::new(habits.clone());
    let dto = handler
        .handle(UpdateHabitCommand {
            habit_id: habit_id.clone(),
            name: "Read more".to_string(),
            description: Some("fiction".to_string()),
            cue_time: None,
            cue_location: Some("sofa".to_string()),
            stack_after: None,
            tiny_version: None,
            frequency: Some(vec![5, 6]),
        })
        .await
        .unwrap();

    assert_eq!(dto.name, "Read more");
    assert_eq!(dto.cue_time, "07:30");
    assert_eq!(dto.cue_location, "sofa");
    assert_eq!(dto.tiny_version, "One page");
    assert_eq!(dto.frequency, vec![5, 6]);

    let blank = handler
        .handle(UpdateHabitCommand {
            habit_id,
            name: "   ".to_string(),
            description: None,
            cue_time: None,
            cue_location: None,
            stack_after: None,
            tiny_version: None,
            frequency: None,
        })
        .await;
    assert!(matches!(blank, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_delete_missing_habit() {
    let habits = Arc::new(MockHabitRepository::new());
    let handler = DeleteHabitCommandHandler::new(habits.clone());

    let result = handler
        .handle(DeleteHabitCommand {
            habit_id: HabitId::new().to_string(),
        })
        .await;
    assert!(matches!(result, Err(DomainError::HabitNotFound(_))));
}

// Completions

#[tokio::test]
async fn test_complete_and_undo_today() {
    let users = Arc::new(MockUserRepository::new());
    let habits = Arc::new(MockHabitRepository::new());
    let user_id = register(&users, "alice").await;
    let habit_id = create_habit(&habits, &users, &user_id).await;
    let clock = clock_on("2024-01-07");

    let complete = CompleteHabitTodayCommandHandler::new(habits.clone(), clock.clone());
    let result = complete
        .handle(CompleteHabitTodayCommand {
            habit_id: habit_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(result.current_streak, 1);
    assert_eq!(result.habit.completions.len(), 1);

    let again = complete
        .handle(CompleteHabitTodayCommand {
            habit_id: habit_id.clone(),
        })
        .await;
    assert!(matches!(again, Err(DomainError::AlreadyCompleted(_))));

    let undo = UndoHabitTodayCommandHandler::new(habits.clone(), clock.clone());
    let result = undo
        .handle(UndoHabitTodayCommand {
            habit_id: habit_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(result.current_streak, 0);

    let again = undo.handle(UndoHabitTodayCommand { habit_id }).await;
    assert!(matches!(again, Err(DomainError::NotCompleted(_))));
}

#[tokio::test]
async fn test_set_completion_scenario() {
    let users = Arc::new(MockUserRepository::new());
    let habits = Arc::new(MockHabitRepository::new());
    let user_id = register(&users, "alice").await;
    let habit_id = create_habit(&habits, &users, &user_id).await;
    let handler = SetHabitCompletionCommandHandler::new(habits.clone(), clock_on("2024-01-07"));

    let set = |date: &str, completed: bool| SetHabitCompletionCommand {
        habit_id: habit_id.clone(),
        date: DateInput::from(date),
        completed,
    };

    handler.handle(set("2024-01-05", true)).await.unwrap();
    handler.handle(set("2024-01-06T00:00:00Z", true)).await.unwrap();
    let result = handler.handle(set("2024-01-07", true)).await.unwrap();
    assert_eq!(result.current_streak, 3);

    // Idempotent
    let result = handler.handle(set("2024-01-07", true)).await.unwrap();
    assert_eq!(result.current_streak, 3);
    assert_eq!(result.habit.completions.len(), 3);

    let result = handler.handle(set("2024-01-06", false)).await.unwrap();
    assert_eq!(result.current_streak, 1);

    let future = handler.handle(set("2024-01-08", true)).await;
    assert!(matches!(future, Err(DomainError::FutureDateRejected(_))));

    let invalid = handler.handle(set("not a date", true)).await;
    assert!(matches!(invalid, Err(DomainError::InvalidDate(_))));

    let stored = habits
        .find_by_id(&HabitId::from_string(&habit_id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.current_streak(), 1);
    assert_eq!(stored.completions().len(), 2);
}

#[tokio::test]
async fn test_completion_retries_version_conflicts() {
    let users = Arc::new(MockUserRepository::new());
    let habits = Arc::new(MockHabitRepository::new());
    let user_id = register(&users, "alice").await;
    let habit_id = create_habit(&habits, &users, &user_id).await;
    let handler = CompleteHabitTodayCommandHandler::new(habits.clone(), clock_on("2024-01-07"));

    habits.inject_conflicts(MAX_COMPLETION_ATTEMPTS - 1).await;
    let result = handler
        .handle(CompleteHabitTodayCommand {
            habit_id: habit_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(result.current_streak, 1);

    let undo = UndoHabitTodayCommandHandler::new(habits.clone(), clock_on("2024-01-07"));
    habits.inject_conflicts(MAX_COMPLETION_ATTEMPTS).await;
    let exhausted = undo.handle(UndoHabitTodayCommand { habit_id }).await;
    assert!(matches!(
        exhausted,
        Err(DomainError::ConcurrentModification(_))
    ));
}

#[tokio::test]
async fn test_completion_on_missing_habit() {
    let habits = Arc::new(MockHabitRepository::new());
    let handler = CompleteHabitTodayCommandHandler::new(habits, clock_on("2024-01-07"));

    let result = handler
        .handle(CompleteHabitTodayCommand {
            habit_id: HabitId::new().to_string(),
        })
        .await;
    assert!(matches!(result, Err(DomainError::HabitNotFound(_))));

    let malformed = handler
        .handle(CompleteHabitTodayCommand {
            habit_id: "not-an-id".to_string(),
        })
        .await;
    assert!(matches!(malformed, Err(DomainError::InvalidInput(_))));
}

// Friends

#[tokio::test]
async fn test_add_and_remove_friend() {
    let users = Arc::new(MockUserRepository::new());
    let alice = register(&users, "alice").await;
    let bob = register(&users, "bob").await;
    let bob_code = users
        .find_by_id(&UserId::from_string(&bob))
        .await
        .unwrap()
        .unwrap()
        .share_code()
        .to_string();

    let add = AddFriendCommandHandler::new(users.clone());
    let friend = add
        .handle(AddFriendCommand {
            user_id: alice.clone(),
            share_code: bob_code.clone(),
        })
        .await
        .unwrap();
    assert_eq!(friend.username, "bob");

    let twice = add
        .handle(AddFriendCommand {
            user_id: alice.clone(),
            share_code: bob_code,
        })
        .await;
    assert!(matches!(twice, Err(DomainError::Validation(_))));

    let unknown = add
        .handle(AddFriendCommand {
            user_id: alice.clone(),
            share_code: "HABIT-00000".to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(DomainError::NotFound(_))));

    let remove = RemoveFriendCommandHandler::new(users.clone());
    let result = remove
        .handle(RemoveFriendCommand {
            user_id: alice.clone(),
            friend_id: bob.clone(),
        })
        .await
        .unwrap();
    assert!(result.removed);

    let saved = users
        .find_by_id(&UserId::from_string(&alice))
        .await
        .unwrap()
        .unwrap();
    assert!(saved.friends().is_empty());
}

#[tokio::test]
async fn test_cannot_befriend_self() {
    let users = Arc::new(MockUserRepository::new());
    let alice = register(&users, "alice").await;
    let own_code = users
        .find_by_id(&UserId::from_string(&alice))
        .await
        .unwrap()
        .unwrap()
        .share_code()
        .to_string();

    let add = AddFriendCommandHandler::new(users.clone());
    let result = add
        .handle(AddFriendCommand {
            user_id: alice,
            share_code: own_code,
        })
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

// Journal

#[tokio::test]
async fn test_journal_upsert_overwrites_same_day() {
    let users = Arc::new(MockUserRepository::new());
    let journal = Arc::new(MockJournalRepository::new());
    let user_id = register(&users, "alice").await;
    let handler = UpsertJournalEntryCommandHandler::new(journal.clone(), users.clone());

    let first = handler
        .handle(UpsertJournalEntryCommand {
            user_id: user_id.clone(),
            date: DateInput::from("2024-03-01"),
            content: Some("Good day".to_string()),
            images: None,
        })
        .await
        .unwrap();
    assert!(first.created);

    let second = handler
        .handle(UpsertJournalEntryCommand {
            user_id: user_id.clone(),
            date: DateInput::from("2024-03-01T18:00:00Z"),
            content: Some("Better day".to_string()),
            images: Some(vec!["photo.png".to_string()]),
        })
        .await
        .unwrap();
    assert!(!second.created);
    assert_eq!(second.entry.id, first.entry.id);
    assert_eq!(second.entry.content, "Better day");
    assert_eq!(second.entry.images, vec!["photo.png".to_string()]);

    let all = journal
        .find_by_user(&UserId::from_string(&user_id))
        .await
        .unwrap();
    assert_eq!(all.len(), 1);

    let delete = DeleteJournalEntryCommandHandler::new(journal.clone());
    delete
        .handle(DeleteJournalEntryCommand {
            entry_id: first.entry.id.clone(),
        })
        .await
        .unwrap();
    let missing = delete
        .handle(DeleteJournalEntryCommand {
            entry_id: first.entry.id,
        })
        .await;
    assert!(matches!(missing, Err(DomainError::JournalEntryNotFound(_))));
}
