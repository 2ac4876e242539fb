//! # Password hashing and verification: Argon2id
//!
//! - [`hash_password`] salts with [`OsRng`] and returns a PHC string
//!   (`$argon2id$v=19$m=19456,t=2,p=1$...`), the format expected in the
//!   `password_hash` field of `[[accounts]]` entries in `site.toml`.
//! - [`verify_password`] returns `Ok(true)` on match, `Ok(false)` on mismatch,
//!   and `Err` when the stored hash cannot be parsed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::AuthError;

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::MalformedHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
