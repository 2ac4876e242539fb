//! # Signed-in user
//!
//! [`UserInfo`] is the identity record the session provider hands to the UI.
//! It is `Serialize + Deserialize + PartialEq` so it can cross the
//! server/client boundary through Dioxus server functions and be stored
//! verbatim in the tower-sessions session.
//!
//! It is projected from a configured [`AccountEntry`] and never carries the
//! password hash.

use serde::{Deserialize, Serialize};
use store::config::AccountEntry;
use store::AccountType;

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub account_type: AccountType,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

impl From<&AccountEntry> for UserInfo {
    fn from(entry: &AccountEntry) -> Self {
        Self {
            id: entry.id.clone(),
            email: entry.email.clone(),
            name: entry.name.clone(),
            account_type: entry.account_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_drops_hash() {
        let entry = AccountEntry {
            id: "stu-1".to_string(),
            email: "sam@campus.example".to_string(),
            name: None,
            account_type: AccountType::Student,
            password_hash: "$argon2id$secret".to_string(),
        };
        let info = UserInfo::from(&entry);
        assert_eq!(info.id, "stu-1");
        assert_eq!(info.display_name(), "sam@campus.example");
        assert_eq!(info.account_type, AccountType::Student);
    }
}
