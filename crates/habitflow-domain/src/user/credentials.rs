use crate::shared::DomainError;

/// One-way password hashing. The infrastructure layer supplies the algorithm.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
