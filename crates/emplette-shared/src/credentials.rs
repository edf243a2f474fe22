//! Password hashing.
//!
//! The original application stored and compared passwords in plaintext;
//! here credentials are hashed with Argon2id and stored as PHC strings.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::CredentialError;

/// Hash a password with a freshly generated salt.
///
/// The returned PHC string embeds the salt and parameters, so it is the
/// only value that needs to be persisted.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CredentialError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// A mismatch is `Ok(false)`, not an error; only a malformed stored hash
/// is reported as a failure.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, CredentialError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| CredentialError::MalformedHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_is_not_plaintext() {
        let hash = hash_password("abcd1234").unwrap();
        assert_ne!(hash, "abcd1234");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("abcd1234", &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_a_clean_mismatch() {
        let hash = hash_password("abcd1234").unwrap();
        assert!(!verify_password("abcd12345", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("abcd1234").unwrap();
        let b = hash_password("abcd1234").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_stored_hash_is_an_error() {
        assert!(verify_password("abcd1234", "plaintext-from-v0").is_err());
    }
}
