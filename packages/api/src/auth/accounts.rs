//! Credential checks against the `[[accounts]]` directory of `site.toml`.

use store::SiteConfig;

use super::{verify_password, AuthError};
use crate::models::UserInfo;

/// Check `email` / `password` against the configured accounts.
///
/// An unknown email and a wrong password both yield
/// [`AuthError::InvalidCredentials`]. A malformed stored hash is reported as
/// such so misconfiguration is visible in the server log.
pub fn authenticate(config: &SiteConfig, email: &str, password: &str) -> Result<UserInfo, AuthError> {
    let Some(account) = config.account_by_email(email) else {
        tracing::debug!("login attempt for unknown account");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(password, &account.password_hash)? {
        tracing::debug!(account = %account.id, "login attempt with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    Ok(UserInfo::from(account))
}
