use std::sync::Arc;

use crate::application::dtos::{JournalDayDto, JournalEntryDto, JournalListDto};
use habitflow_domain::calendar::normalize_or_err;
use habitflow_domain::journal::JournalRepository;
use habitflow_domain::shared::{DomainError, UserId};

pub struct JournalQueries {
    journal_repo: Arc<dyn JournalRepository>,
}

impl JournalQueries {
    pub fn new(journal_repo: Arc<dyn JournalRepository>) -> Self {
        Self { journal_repo }
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<JournalListDto, DomainError> {
        let id = UserId::parse(user_id)?;
        let entries: Vec<JournalEntryDto> = self
            .journal_repo
            .find_by_user(&id)
            .await?
            .iter()
            .map(JournalEntryDto::from)
            .collect();

        Ok(JournalListDto {
            count: entries.len(),
            entries,
        })
    }

    pub async fn for_date(&self, user_id: &str, date: &str) -> Result<JournalDayDto, DomainError> {
        let id = UserId::parse(user_id)?;
        let day = normalize_or_err(date)?;
        let entry = self.journal_repo.find_by_user_and_date(&id, day).await?;

        Ok(JournalDayDto {
            entry: entry.as_ref().map(JournalEntryDto::from),
        })
    }
}
