//! Password hashing and verification.
//!
//! Uses Argon2id with the crate's default (memory-hard) parameters and a
//! random per-password salt. The result is a PHC-format string (e.g.
//! `$argon2id$v=19$m=19456,t=2,p=1$...`) stored in the `password_hash`
//! column. The work factor is tunable through [`argon2::Params`] if the
//! defaults ever need adjusting.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is
/// malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("sekret").unwrap();
        assert!(verify_password("sekret", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hash_does_not_contain_plaintext() {
        let hash = hash_password("sekret").unwrap();
        assert!(!hash.contains("sekret"));
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_salts_are_unique() {
        let a = hash_password("sekret").unwrap();
        let b = hash_password("sekret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("sekret", "not-a-phc-string").is_err());
    }
}
