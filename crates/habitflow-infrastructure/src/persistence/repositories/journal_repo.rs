use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::RepositoryErrorMapper;
use habitflow_domain::journal::{JournalEntry, JournalRepository};
use habitflow_domain::shared::{DomainError, JournalEntryId, UserId};
use habitflow_domain::DateKey;

#[derive(FromRow)]
struct JournalRow {
    id: String,
    user_id: String,
    date_key: String,
    content: String,
    images: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl JournalRow {
    fn into_entry(self) -> Result<JournalEntry, DomainError> {
        let date = DateKey::parse(&self.date_key).ok_or_else(|| {
            DomainError::DataIntegrity(format!(
                "Journal entry {} has invalid date {}",
                self.id, self.date_key
            ))
        })?;
        let images: Vec<String> = serde_json::from_str(&self.images)
            .map_err(|e| RepositoryErrorMapper::map_json_error(e, "Deserialize journal images"))?;

        Ok(JournalEntry::restore(
            JournalEntryId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            date,
            self.content,
            images,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqliteJournalRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteJournalRepository {
    const SELECT_QUERY: &'static str = r#"
            SELECT id, user_id, date_key, content, images, created_at, updated_at
            FROM journal_entries
        "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalRepository for SqliteJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let images = serde_json::to_string(entry.images())
            .map_err(|e| RepositoryErrorMapper::map_json_error(e, "Serialize journal images"))?;

        let query = r#"
            INSERT INTO journal_entries (id, user_id, date_key, content, images, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                content = ?4,
                images = ?5,
                updated_at = ?7
        "#;

        sqlx::query(query)
            .bind(entry.id().as_str())
            .bind(entry.user_id().as_str())
            .bind(entry.date().to_string())
            .bind(entry.content())
            .bind(images)
            .bind(entry.created_at())
            .bind(entry.updated_at())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Save journal entry"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &JournalEntryId) -> Result<Option<JournalEntry>, DomainError> {
        let query = format!("{} WHERE id = ?1", Self::SELECT_QUERY);
        let row: Option<JournalRow> = sqlx::query_as(&query)
            .bind(id.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Find journal entry"))?;

        row.map(JournalRow::into_entry).transpose()
    }

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: DateKey,
    ) -> Result<Option<JournalEntry>, DomainError> {
        let query = format!("{} WHERE user_id = ?1 AND date_key = ?2", Self::SELECT_QUERY);
        let row: Option<JournalRow> = sqlx::query_as(&query)
            .bind(user_id.as_str())
            .bind(date.to_string())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Find journal entry by date"))?;

        row.map(JournalRow::into_entry).transpose()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 ORDER BY date_key DESC",
            Self::SELECT_QUERY
        );
        let rows: Vec<JournalRow> = sqlx::query_as(&query)
            .bind(user_id.as_str())
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Find journal entries"))?;

        rows.into_iter().map(JournalRow::into_entry).collect()
    }

    async fn delete(&self, id: &JournalEntryId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = ?1")
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Delete journal entry"))?;

        Ok(result.rows_affected() > 0)
    }
}
