mod aggregate;
mod credentials;
mod repository;
mod value_objects;


pub use aggregate::User;
pub use credentials::CredentialHasher;
pub use repository::UserRepository;
pub use value_objects::{validate_password, ShareCode, Username, MIN_PASSWORD_LENGTH};
