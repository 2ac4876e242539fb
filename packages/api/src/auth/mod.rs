//! Session-backed password authentication.

#[cfg(feature = "server")]
mod accounts;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod password;
mod session;

#[cfg(feature = "server")]
pub use accounts::authenticate;
#[cfg(feature = "server")]
pub use error::AuthError;
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_KEY;
