use habitflow_domain::DateInput;

use crate::application::commands::command_handler::Command;
use crate::application::dtos::JournalEntryDto;

/// Create the entry for (user, date) or overwrite the existing one
#[derive(Debug, Clone)]
pub struct UpsertJournalEntryCommand {
    pub user_id: String,
    pub date: DateInput,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
}

impl Command for UpsertJournalEntryCommand {}

#[derive(Debug, Clone)]
pub struct DeleteJournalEntryCommand {
    pub entry_id: String,
}

impl Command for DeleteJournalEntryCommand {}

#[derive(Debug, Clone)]
pub struct UpsertJournalEntryResult {
    pub entry: JournalEntryDto,
    /// False when an existing entry for the day was overwritten
    pub created: bool,
}

#[derive(Debug, Clone)]
pub struct DeleteJournalEntryResult {
    pub success: bool,
}
