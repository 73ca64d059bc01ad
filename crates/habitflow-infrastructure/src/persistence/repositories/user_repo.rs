use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::persistence::RepositoryErrorMapper;
use habitflow_domain::shared::{DomainError, UserId};
use habitflow_domain::user::{ShareCode, User, UserRepository, Username};

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    password_hash: String,
    share_code: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self, friends: Vec<UserId>) -> User {
        User::restore(
            UserId::from_string(&self.id),
            Username::from_string(&self.username),
            self.password_hash,
            ShareCode::from_string(&self.share_code),
            friends,
            self.created_at,
        )
    }
}

pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    const SELECT_QUERY: &'static str =
        "SELECT id, username, password_hash, share_code, created_at FROM users";

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn load_friends(&self, user_id: &str) -> Result<Vec<UserId>, DomainError> {
        let ids: Vec<String> = sqlx::query_scalar(
            "SELECT friend_id FROM friendships WHERE user_id = ?1 ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Load friends"))?;

        Ok(ids.iter().map(|id| UserId::from_string(id)).collect())
    }

    async fn find_one(
        &self,
        column: &str,
        value: &str,
        context: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE {} = ?1", Self::SELECT_QUERY, column);
        let row: Option<UserRow> = sqlx::query_as(&query)
            .bind(value)
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;

        match row {
            Some(row) => {
                let friends = self.load_friends(&row.id).await?;
                Ok(Some(row.into_user(friends)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin transaction"))?;

        let query = r#"
            INSERT INTO users (id, username, password_hash, share_code, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
        "#;
        sqlx::query(query)
            .bind(user.id().as_str())
            .bind(user.username().as_str())
            .bind(user.password_hash())
            .bind(user.share_code().as_str())
            .bind(user.created_at())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Insert user"))?;

        for (position, friend) in user.friends().iter().enumerate() {
            sqlx::query("INSERT INTO friendships (user_id, friend_id, position) VALUES (?1, ?2, ?3)")
                .bind(user.id().as_str())
                .bind(friend.as_str())
                .bind(position as i64)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Insert friend"))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit transaction"))?;

        info!("User created: {} ({})", user.id(), user.username());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.find_one("id", id.as_str(), "Find user by ID").await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username, "Find user by username")
            .await
    }

    async fn find_by_share_code(&self, code: &ShareCode) -> Result<Option<User>, DomainError> {
        self.find_one("share_code", code.as_str(), "Find user by share code")
            .await
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = (1..=ids.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(",");
        let query = format!("{} WHERE id IN ({})", Self::SELECT_QUERY, placeholders);

        let mut query_builder = sqlx::query_as::<_, UserRow>(&query);
        for id in ids {
            query_builder = query_builder.bind(id.as_str());
        }
        let rows = query_builder
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Find users by IDs"))?;

        // Keep the caller's order
        let mut by_id: HashMap<String, UserRow> =
            rows.into_iter().map(|row| (row.id.clone(), row)).collect();
        let mut users = Vec::with_capacity(by_id.len());
        for id in ids {
            if let Some(row) = by_id.remove(id.as_str()) {
                let friends = self.load_friends(&row.id).await?;
                users.push(row.into_user(friends));
            }
        }
        Ok(users)
    }

    async fn share_code_exists(&self, code: &ShareCode) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE share_code = ?1)")
            .bind(code.as_str())
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Check share code"))
    }

    async fn add_friend(&self, user_id: &UserId, friend_id: &UserId) -> Result<bool, DomainError> {
        // Position is computed inside the statement so concurrent adds never collide
        let query = r#"
            INSERT OR IGNORE INTO friendships (user_id, friend_id, position)
            SELECT ?1, ?2, COALESCE(MAX(position) + 1, 0)
            FROM friendships
            WHERE user_id = ?1
        "#;
        let result = sqlx::query(query)
            .bind(user_id.as_str())
            .bind(friend_id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Add friend"))?;

        let added = result.rows_affected() > 0;
        info!("add_friend({} -> {}): added={}", user_id, friend_id, added);
        Ok(added)
    }

    async fn remove_friend(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM friendships WHERE user_id = ?1 AND friend_id = ?2")
            .bind(user_id.as_str())
            .bind(friend_id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Remove friend"))?;

        let removed = result.rows_affected() > 0;
        info!("remove_friend({} -> {}): removed={}", user_id, friend_id, removed);
        Ok(removed)
    }

    async fn replace_password_hash(
        &self,
        user_id: &UserId,
        expected: &str,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = ?1 WHERE id = ?2 AND password_hash = ?3",
        )
        .bind(password_hash)
        .bind(user_id.as_str())
        .bind(expected)
        .execute(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Update password hash"))?;

        let replaced = result.rows_affected() > 0;
        info!("replace_password_hash({}): replaced={}", user_id, replaced);
        Ok(replaced)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        // Habits, completions, journal entries and friendships in both
        // directions go with the user through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Delete user"))?;

        let deleted = result.rows_affected() > 0;
        info!("User delete({}): deleted={}", id, deleted);
        Ok(deleted)
    }
}
