//! Common types used across the Address client library.

pub mod common;
pub mod requests;

pub use common::*;
pub use requests::{
    DEFAULT_TRANSACTIONS_LIMIT, PermissionsRequest, REVOKE_ALL_PERMISSIONS, SendRequest,
    TransactionsRequest,
};
