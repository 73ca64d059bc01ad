use chrono::{DateTime, Utc};

use crate::calendar::DateKey;
use crate::shared::{JournalEntryId, UserId};

/// A user's note for one calendar day. At most one per user and day.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    id: JournalEntryId,
    user_id: UserId,
    date: DateKey,
    content: String,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(
        user_id: UserId,
        date: DateKey,
        content: Option<String>,
        images: Option<Vec<String>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: JournalEntryId::new(),
            user_id,
            date,
            content: content.unwrap_or_default(),
            images: images.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(
        id: JournalEntryId,
        user_id: UserId,
        date: DateKey,
        content: String,
        images: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            date,
            content,
            images,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &JournalEntryId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> DateKey {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the body of an existing entry, keeping its identity.
    pub fn rewrite(&mut self, content: Option<String>, images: Option<Vec<String>>) {
        self.content = content.unwrap_or_default();
        self.images = images.unwrap_or_default();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_rewrite() {
        let day = DateKey::parse("2024-05-01").unwrap();
        let mut entry = JournalEntry::new(UserId::new(), day, None, None);
        assert_eq!(entry.content(), "");
        assert!(entry.images().is_empty());

        let id = entry.id().clone();
        entry.rewrite(Some("walked 5k".to_string()), Some(vec!["a.png".to_string()]));
        assert_eq!(entry.id(), &id);
        assert_eq!(entry.content(), "walked 5k");
        assert_eq!(entry.images(), ["a.png".to_string()]);
        assert!(entry.updated_at() >= entry.created_at());
    }
}
