use serde::{Deserialize, Serialize};

use habitflow_domain::journal::JournalEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryDto {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub content: String,
    pub images: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&JournalEntry> for JournalEntryDto {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            user_id: entry.user_id().to_string(),
            date: entry.date().to_string(),
            content: entry.content().to_string(),
            images: entry.images().to_vec(),
            created_at: entry.created_at().to_rfc3339(),
            updated_at: entry.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalListDto {
    pub count: usize,
    pub entries: Vec<JournalEntryDto>,
}

/// `entry` is null when nothing was written that day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDayDto {
    pub entry: Option<JournalEntryDto>,
}
