//! Common domain types for the Address API.

use serde::{Deserialize, Serialize};

/// Permission a user can hold on a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Read-only access
    View,
    /// Place orders
    Order,
    /// Transfer funds
    Transfer,
    /// Full control
    Admin,
}

impl Permission {
    /// All permissions, in the order the API lists them.
    pub const ALL: [Permission; 4] = [
        Permission::View,
        Permission::Order,
        Permission::Transfer,
        Permission::Admin,
    ];

    /// Wire name of the permission.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::View => "view",
            Permission::Order => "order",
            Permission::Transfer => "transfer",
            Permission::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown permission: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_wire_names() {
        assert_eq!(Permission::Transfer.to_string(), "transfer");
        assert_eq!("admin".parse::<Permission>(), Ok(Permission::Admin));
        assert!("0".parse::<Permission>().is_err());
        assert_eq!(
            serde_json::to_string(&Permission::View).unwrap(),
            "\"view\""
        );
    }
}
