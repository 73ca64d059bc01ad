use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::journal_commands::*;
use crate::application::dtos::JournalEntryDto;
use habitflow_domain::calendar::normalize_or_err;
use habitflow_domain::journal::{JournalEntry, JournalRepository};
use habitflow_domain::shared::{DomainError, JournalEntryId, UserId};
use habitflow_domain::user::UserRepository;

/// Upsert journal entry command handler
pub struct UpsertJournalEntryCommandHandler {
    journal_repo: Arc<dyn JournalRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl UpsertJournalEntryCommandHandler {
    pub fn new(
        journal_repo: Arc<dyn JournalRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            journal_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<UpsertJournalEntryCommand> for UpsertJournalEntryCommandHandler {
    type Result = UpsertJournalEntryResult;

    async fn handle(&self, cmd: UpsertJournalEntryCommand) -> Result<Self::Result, DomainError> {
        let user_id = UserId::parse(&cmd.user_id)?;
        let date = normalize_or_err(cmd.date)?;

        if self.user_repo.find_by_id(&user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(cmd.user_id));
        }

        let (entry, created) = match self
            .journal_repo
            .find_by_user_and_date(&user_id, date)
            .await?
        {
            Some(mut existing) => {
                existing.rewrite(cmd.content, cmd.images);
                (existing, false)
            }
            None => (JournalEntry::new(user_id, date, cmd.content, cmd.images), true),
        };

        self.journal_repo.save(&entry).await?;

        info!(
            "Journal entry {} for {} on {}",
            if created { "created" } else { "updated" },
            entry.user_id(),
            date
        );

        Ok(UpsertJournalEntryResult {
            entry: JournalEntryDto::from(&entry),
            created,
        })
    }
}

pub struct DeleteJournalEntryCommandHandler {
    journal_repo: Arc<dyn JournalRepository>,
}

impl DeleteJournalEntryCommandHandler {
    pub fn new(journal_repo: Arc<dyn JournalRepository>) -> Self {
        Self { journal_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteJournalEntryCommand> for DeleteJournalEntryCommandHandler {
    type Result = DeleteJournalEntryResult;

    async fn handle(&self, cmd: DeleteJournalEntryCommand) -> Result<Self::Result, DomainError> {
        let entry_id = JournalEntryId::parse(&cmd.entry_id)?;
        if !self.journal_repo.delete(&entry_id).await? {
            return Err(DomainError::JournalEntryNotFound(cmd.entry_id));
        }

        info!("Journal entry deleted: {}", entry_id);

        Ok(DeleteJournalEntryResult { success: true })
    }
}
