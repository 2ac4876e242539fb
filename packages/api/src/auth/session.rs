//! Session keys.

/// Key under which the signed-in [`UserInfo`](crate::UserInfo) is stored in the session.
pub const SESSION_USER_KEY: &str = "user";
