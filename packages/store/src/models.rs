use std::fmt;

use serde::{Deserialize, Serialize};

/// Distinguishes individual students from organization administrators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Student,
    Organization,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Student, AccountType::Organization];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Student => "student",
            AccountType::Organization => "organization",
        }
    }

    /// Root of the area this account type lands on by default.
    pub fn home_path(&self) -> &'static str {
        match self {
            AccountType::Organization => "/admin",
            AccountType::Student => "/dashboard",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_paths() {
        assert_eq!(AccountType::Organization.home_path(), "/admin");
        assert_eq!(AccountType::Student.home_path(), "/dashboard");
    }

    #[test]
    fn test_display_matches_serde_name() {
        #[derive(Serialize)]
        struct Wrapper {
            kind: AccountType,
        }
        for kind in AccountType::ALL {
            let encoded = toml::to_string(&Wrapper { kind }).unwrap();
            assert_eq!(encoded.trim(), format!("kind = \"{kind}\""));
        }
    }
}
