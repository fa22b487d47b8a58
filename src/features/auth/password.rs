use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::core::error::{AppError, Result};

/// Hash a plaintext password into a PHC string
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("argon2 hash_password error: {}", e);
            AppError::Internal("Failed to hash password".to_string())
        })
}

/// Returns false on mismatch; errors only when the stored hash is malformed
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        tracing::error!("argon2 parse hash error: {}", e);
        AppError::Internal("Stored password hash is invalid".to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct-horse-battery").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct-horse-battery", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("correct-horse-battery").unwrap();
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-valid-hash").is_err());
    }
}
