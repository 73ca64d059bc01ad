use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

use super::types::{CompletionRow, HabitRow};
use crate::persistence::RepositoryErrorMapper;
use habitflow_domain::habit::Habit;
use habitflow_domain::shared::{DomainError, HabitId, UserId};

impl super::SqliteHabitRepository {
    pub(super) async fn find_by_id_impl(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let start = Instant::now();
        let query = format!("{} WHERE id = ?1", Self::SELECT_QUERY);

        let row: Option<HabitRow> = sqlx::query_as(&query)
            .bind(id.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Find habit by ID"))?;

        let Some(row) = row else {
            debug!("find_by_id({}): not found", id);
            return Ok(None);
        };

        let keys: Vec<String> = sqlx::query_scalar(
            "SELECT date_key FROM habit_completions WHERE habit_id = ?1 ORDER BY date_key",
        )
        .bind(id.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Load habit completions"))?;

        debug!(
            "find_by_id({}): {:.2}ms, completions: {}",
            id,
            start.elapsed().as_secs_f64() * 1000.0,
            keys.len()
        );

        row.into_habit(keys).map(Some)
    }

    pub(super) async fn find_by_user_impl(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let start = Instant::now();
        let query = format!(
            "{} WHERE user_id = ?1 ORDER BY created_at DESC, id",
            Self::SELECT_QUERY
        );

        let rows: Vec<HabitRow> = sqlx::query_as(&query)
            .bind(user_id.as_str())
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Find habits by user"))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let completion_rows: Vec<CompletionRow> = sqlx::query_as(
            r#"
            SELECT c.habit_id, c.date_key
            FROM habit_completions c
            JOIN habits h ON h.id = c.habit_id
            WHERE h.user_id = ?1
            ORDER BY c.date_key
        "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Load user completions"))?;

        let mut by_habit: HashMap<String, Vec<String>> = HashMap::new();
        for completion in completion_rows {
            by_habit
                .entry(completion.habit_id)
                .or_default()
                .push(completion.date_key);
        }

        let habits = rows
            .into_iter()
            .map(|row| {
                let keys = by_habit.remove(&row.id).unwrap_or_default();
                row.into_habit(keys)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "find_by_user({}): {:.2}ms, habits: {}",
            user_id,
            start.elapsed().as_secs_f64() * 1000.0,
            habits.len()
        );

        Ok(habits)
    }
}
