use sqlx::{Sqlite, Transaction};
use std::time::Instant;
use tracing::{debug, info};

use crate::persistence::RepositoryErrorMapper;
use habitflow_domain::habit::Habit;
use habitflow_domain::shared::{DomainError, HabitId};

impl super::SqliteHabitRepository {
    pub(super) async fn save_impl(&self, habit: &Habit) -> Result<(), DomainError> {
        let start = Instant::now();
        let schedule = serde_json::to_string(habit.schedule())
            .map_err(|e| RepositoryErrorMapper::map_json_error(e, "Serialize habit schedule"))?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin transaction"))?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM habits WHERE id = ?1)")
            .bind(habit.id().as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Check habit exists"))?;

        if exists {
            let query = r#"
                UPDATE habits SET
                    name = ?2,
                    description = ?3,
                    cue_time = ?4,
                    cue_location = ?5,
                    stack_after = ?6,
                    tiny_version = ?7,
                    schedule = ?8
                WHERE id = ?1
            "#;
            sqlx::query(query)
                .bind(habit.id().as_str())
                .bind(habit.name())
                .bind(habit.description())
                .bind(&habit.plan().cue_time)
                .bind(&habit.plan().cue_location)
                .bind(&habit.plan().stack_after)
                .bind(&habit.plan().tiny_version)
                .bind(&schedule)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Update habit"))?;
        } else {
            let query = r#"
                INSERT INTO habits (
                    id, user_id, name, description, cue_time, cue_location,
                    stack_after, tiny_version, schedule, current_streak, version, created_at
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#;
            sqlx::query(query)
                .bind(habit.id().as_str())
                .bind(habit.user_id().as_str())
                .bind(habit.name())
                .bind(habit.description())
                .bind(&habit.plan().cue_time)
                .bind(&habit.plan().cue_location)
                .bind(&habit.plan().stack_after)
                .bind(&habit.plan().tiny_version)
                .bind(&schedule)
                .bind(habit.current_streak() as i64)
                .bind(habit.version())
                .bind(habit.created_at())
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Insert habit"))?;

            write_completions(&mut tx, habit).await?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit transaction"))?;

        info!(
            "Habit saved: {} ({}) in {:.2}ms",
            habit.id(),
            if exists { "updated" } else { "created" },
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    pub(super) async fn save_completions_impl(&self, habit: &Habit) -> Result<i64, DomainError> {
        let start = Instant::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Begin transaction"))?;

        let updated = sqlx::query(
            "UPDATE habits SET current_streak = ?1, version = version + 1 WHERE id = ?2 AND version = ?3",
        )
        .bind(habit.current_streak() as i64)
        .bind(habit.id().as_str())
        .bind(habit.version())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Update habit streak"))?
        .rows_affected();

        if updated == 0 {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM habits WHERE id = ?1)")
                    .bind(habit.id().as_str())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Check habit exists"))?;

            return Err(if exists {
                DomainError::ConcurrentModification(format!(
                    "Habit {} changed since version {}",
                    habit.id(),
                    habit.version()
                ))
            } else {
                DomainError::HabitNotFound(habit.id().to_string())
            });
        }

        sqlx::query("DELETE FROM habit_completions WHERE habit_id = ?1")
            .bind(habit.id().as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Clear habit completions"))?;
        write_completions(&mut tx, habit).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Commit transaction"))?;

        let version = habit.version() + 1;
        debug!(
            "save_completions({}): {} days, streak {}, version {} in {:.2}ms",
            habit.id(),
            habit.completions().len(),
            habit.current_streak(),
            version,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(version)
    }

    pub(super) async fn delete_impl(&self, id: &HabitId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM habits WHERE id = ?1")
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Delete habit"))?;

        let deleted = result.rows_affected() > 0;
        info!("Habit delete({}): deleted={}", id, deleted);
        Ok(deleted)
    }
}

async fn write_completions(
    tx: &mut Transaction<'_, Sqlite>,
    habit: &Habit,
) -> Result<(), DomainError> {
    for day in habit.completions().iter() {
        sqlx::query("INSERT INTO habit_completions (habit_id, date_key) VALUES (?1, ?2)")
            .bind(habit.id().as_str())
            .bind(day.to_string())
            .execute(&mut **tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Insert habit completion"))?;
    }
    Ok(())
}
