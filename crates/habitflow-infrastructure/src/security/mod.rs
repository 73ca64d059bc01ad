mod password;

pub use password::{Argon2CredentialHasher, PasswordError};
