use chrono::{DateTime, Utc};

use super::value_objects::{ShareCode, Username};
use crate::shared::{DomainError, UserId};

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: Username,
    password_hash: String,
    share_code: ShareCode,
    friends: Vec<UserId>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: Username, password_hash: String, share_code: ShareCode) -> Self {
        Self {
            id: UserId::new(),
            username,
            password_hash,
            share_code,
            friends: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn restore(
        id: UserId,
        username: Username,
        password_hash: String,
        share_code: ShareCode,
        friends: Vec<UserId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            share_code,
            friends,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn share_code(&self) -> &ShareCode {
        &self.share_code
    }

    pub fn friends(&self) -> &[UserId] {
        &self.friends
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn change_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }

    pub fn is_friend_with(&self, other: &UserId) -> bool {
        self.friends.contains(other)
    }

    pub fn add_friend(&mut self, friend: &UserId) -> Result<(), DomainError> {
        if friend == &self.id {
            return Err(DomainError::Validation(
                "You cannot add yourself as a friend".to_string(),
            ));
        }
        if self.is_friend_with(friend) {
            return Err(DomainError::Validation(
                "Already friends with this user".to_string(),
            ));
        }
        self.friends.push(friend.clone());
        Ok(())
    }

    /// Returns whether the friend was present.
    pub fn remove_friend(&mut self, friend: &UserId) -> bool {
        let before = self.friends.len();
        self.friends.retain(|f| f != friend);
        self.friends.len() != before
    }
}
