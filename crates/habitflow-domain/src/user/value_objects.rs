use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::DomainError;

pub const MIN_PASSWORD_LENGTH: usize = 6;
const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const SHARE_CODE_PREFIX: &str = "HABIT-";

/// 3-20 characters of ASCII letters, digits or underscore.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let valid_len = (USERNAME_MIN..=USERNAME_MAX).contains(&trimmed.len());
        let valid_chars = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_len || !valid_chars {
            return Err(DomainError::Validation(
                "Username must be 3-20 characters using letters, numbers, or underscores"
                    .to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.is_empty() {
        return Err(DomainError::Validation("Password is required".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Public friend code of the form `HABIT-NNNNN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareCode(String);

impl ShareCode {
    pub fn generate() -> Self {
        let number: u32 = rand::thread_rng().gen_range(10_000..=99_999);
        Self(format!("{}{}", SHARE_CODE_PREFIX, number))
    }

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let digits_ok = trimmed
            .strip_prefix(SHARE_CODE_PREFIX)
            .map(|digits| digits.len() == 5 && digits.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false);

        if !digits_ok {
            return Err(DomainError::Validation(format!(
                "Invalid share code: {}",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
