//! Password hashing using bcrypt
//!
//! bcrypt is intentionally CPU-intensive; the async wrappers run it on the
//! blocking thread pool so it never stalls the runtime.

use anyhow::Result;

/// bcrypt cost factor
const BCRYPT_COST: u32 = 10;

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hash = PasswordService::hash(password).unwrap();

        assert!(PasswordService::verify(password, &hash).unwrap());
        assert!(!PasswordService::verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "test_password";
        let hash1 = PasswordService::hash(password).unwrap();
        let hash2 = PasswordService::hash(password).unwrap();

        // Salted, so hashes differ
        assert_ne!(hash1, hash2);

        assert!(PasswordService::verify(password, &hash1).unwrap());
        assert!(PasswordService::verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(PasswordService::verify("anything", "not-a-bcrypt-hash").is_err());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = "async_test_password".to_string();
        let hash = PasswordService::hash_async(password.clone()).await.unwrap();

        assert!(PasswordService::verify_async(password, hash.clone())
            .await
            .unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash)
            .await
            .unwrap());
    }
}
