use thiserror::Error;

/// Failures on the login path.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid password hash: {0}")]
    MalformedHash(String),

    #[error("Failed to hash password: {0}")]
    Hash(String),
}
