//! Request bodies for the wallet and account endpoints.
//!
//! Each request lowers to a [`ParameterSet`] whose key order is the order the
//! remote API signs and verifies.

use rust_decimal::Decimal;

use crate::params::ParameterSet;
use crate::types::Permission;

/// Default page size for transaction listings.
pub const DEFAULT_TRANSACTIONS_LIMIT: u32 = 100;

/// Sentinel permission value that revokes every permission of a user.
pub const REVOKE_ALL_PERMISSIONS: &str = "0";

/// Request to send funds from a wallet or an account.
#[derive(Debug, Clone, PartialEq)]
pub struct SendRequest {
    /// Amount to send.
    pub amount: Decimal,
    /// Recipient address.
    pub recipient: String,
    /// Address that receives the change, if any.
    pub odd_address: Option<String>,
}

impl SendRequest {
    /// Create a new send request.
    pub fn new(amount: Decimal, recipient: impl Into<String>) -> Self {
        Self {
            amount,
            recipient: recipient.into(),
            odd_address: None,
        }
    }

    /// Set the change address.
    pub fn odd_address(mut self, address: impl Into<String>) -> Self {
        self.odd_address = Some(address.into());
        self
    }

    /// Build the form parameters.
    pub fn to_params(&self) -> ParameterSet {
        // The API spells the field "recepient".
        ParameterSet::new()
            .with("amount", self.amount)
            .with("recepient", self.recipient.as_str())
            .with_optional(
                "odd_address",
                self.odd_address.as_deref().filter(|a| !a.is_empty()),
            )
    }
}

/// Request to grant a user permissions on a wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionsRequest {
    /// User receiving the permissions.
    pub user_id: u64,
    /// Permissions to set.
    pub permissions: Vec<Permission>,
}

impl PermissionsRequest {
    /// Create a new permissions request.
    pub fn new(user_id: u64, permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            user_id,
            permissions: permissions.into(),
        }
    }

    /// Build the form parameters.
    pub fn to_params(&self) -> ParameterSet {
        let names: Vec<String> = self
            .permissions
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();
        ParameterSet::new()
            .with("user_id", self.user_id)
            .with("permissions", names)
    }

    /// Build the form parameters that revoke every permission of `user_id`.
    ///
    /// The API expects the literal `"0"` rather than an empty list.
    pub fn remove_all_params(user_id: u64) -> ParameterSet {
        ParameterSet::new()
            .with("user_id", user_id)
            .with("permissions", vec![REVOKE_ALL_PERMISSIONS.to_string()])
    }
}

/// Request for a transaction listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionsRequest {
    /// Maximum number of transactions returned.
    pub limit: u32,
}

impl TransactionsRequest {
    /// Create a request with a custom limit.
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }

    /// Build the form parameters.
    pub fn to_params(&self) -> ParameterSet {
        ParameterSet::new().with("limit", self.limit)
    }
}

impl Default for TransactionsRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSACTIONS_LIMIT)
    }
}

/// Parameters for creating or renaming a wallet.
pub fn wallet_label_params(label: &str) -> ParameterSet {
    ParameterSet::new().with("label", label)
}

/// Parameters for archiving accounts.
pub fn archive_accounts_params(account_ids: &[u64]) -> ParameterSet {
    ParameterSet::new().with("accounts", account_ids)
}
