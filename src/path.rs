//! Resource path resolution for the coin → wallet → account hierarchy.
//!
//! Every request path is relative to the client's base URL, so resolved paths
//! never start with a slash. The full template table:
//!
//! ```text
//! coins.all              coins
//! coins.read             coins/{coin}/
//! wallet.all|create      coins/{coin}/wallets/
//! wallet.read|update|delete
//!                        coins/{coin}/wallets/{w}/
//! wallet.send            coins/{coin}/wallets/{w}/send/
//! wallet.permissions     coins/{coin}/wallets/{w}/permissions/
//! wallet.transactions    coins/{coin}/wallets/{w}/transactions/
//! account.all|create     coins/{coin}/wallets/{w}/accounts/
//! account.read|delete    coins/{coin}/wallets/{w}/accounts/{a}/
//! account.archive        coins/{coin}/wallets/{w}/accounts/archive/
//! account.send           coins/{coin}/wallets/{w}/accounts/{a}/send/
//! account.transactions   coins/{coin}/wallets/{w}/accounts/{a}/transactions/
//! ```

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::AddressError;

/// Bytes escaped in a path segment. `+` is included so a coin never reads as a
/// form-encoded space.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'+');

/// Check that `coin` can stand as a single path segment.
///
/// Blank symbols and the dot segments `.` and `..` are rejected, since a URL
/// join would collapse the latter out of the path.
pub(crate) fn validate_coin(coin: String) -> Result<String, AddressError> {
    let trimmed = coin.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(AddressError::InvalidCoin(coin));
    }
    Ok(coin)
}

/// Top-level resource families of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Supported coins
    Coins,
    /// Wallets of the active coin
    Wallet,
    /// Accounts inside a wallet
    Account,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Coins => write!(f, "coins"),
            ResourceKind::Wallet => write!(f, "wallet"),
            ResourceKind::Account => write!(f, "account"),
        }
    }
}

/// Operations that can be performed on a resource.
///
/// Not every operation is defined for every [`ResourceKind`]; see
/// [`ResourceKind::supports`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List the collection
    All,
    /// Read a single item
    Read,
    /// Create an item
    Create,
    /// Update an item
    Update,
    /// Delete an item
    Delete,
    /// Send funds
    Send,
    /// Set user permissions on a wallet
    Permissions,
    /// List transactions
    Transactions,
    /// Archive accounts in bulk
    Archive,
}

impl Operation {
    /// Whether requests for this operation must carry a `sign` parameter.
    pub fn is_signed(self) -> bool {
        matches!(self, Operation::Send | Operation::Permissions)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::All => "all",
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Send => "send",
            Operation::Permissions => "permissions",
            Operation::Transactions => "transactions",
            Operation::Archive => "archive",
        };
        write!(f, "{}", s)
    }
}

impl ResourceKind {
    /// Check whether a path template exists for `operation` on this kind.
    pub fn supports(self, operation: Operation) -> bool {
        template(self, operation).is_some()
    }
}

/// How deep into the hierarchy a template reaches before its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Root,
    Coin,
    Wallets,
    Wallet,
    Accounts,
    Account,
}

#[derive(Debug, Clone, Copy)]
struct Template {
    scope: Scope,
    suffix: &'static str,
}

const fn at(scope: Scope, suffix: &'static str) -> Option<Template> {
    Some(Template { scope, suffix })
}

/// Template table. `None` marks a pair with no endpoint.
fn template(kind: ResourceKind, operation: Operation) -> Option<Template> {
    use Operation::*;
    use ResourceKind::*;

    match (kind, operation) {
        (Coins, All) => at(Scope::Root, ""),
        (Coins, Read) => at(Scope::Coin, ""),
        (Coins, Create | Update | Delete | Send | Permissions | Transactions | Archive) => None,

        (Wallet, All | Create) => at(Scope::Wallets, ""),
        (Wallet, Read | Update | Delete) => at(Scope::Wallet, ""),
        (Wallet, Send) => at(Scope::Wallet, "send/"),
        (Wallet, Permissions) => at(Scope::Wallet, "permissions/"),
        (Wallet, Transactions) => at(Scope::Wallet, "transactions/"),
        (Wallet, Archive) => None,

        (Account, All | Create) => at(Scope::Accounts, ""),
        (Account, Read | Delete) => at(Scope::Account, ""),
        (Account, Archive) => at(Scope::Accounts, "archive/"),
        (Account, Send) => at(Scope::Account, "send/"),
        (Account, Transactions) => at(Scope::Account, "transactions/"),
        (Account, Update | Permissions) => None,
    }
}

/// Identifiers that scope a request to a position in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    coin: String,
    wallet_id: Option<u64>,
    account_id: Option<u64>,
}

impl PathContext {
    /// Create a context for the given coin symbol.
    ///
    /// Fails with [`AddressError::InvalidCoin`] if the symbol is blank or a
    /// dot segment.
    pub fn new(coin: impl Into<String>) -> Result<Self, AddressError> {
        let coin = validate_coin(coin.into())?;
        Ok(Self {
            coin,
            wallet_id: None,
            account_id: None,
        })
    }

    /// Scope the context to a wallet.
    pub fn with_wallet(mut self, wallet_id: u64) -> Self {
        self.wallet_id = Some(wallet_id);
        self
    }

    /// Scope the context to an account.
    pub fn with_account(mut self, account_id: u64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// The active coin symbol.
    pub fn coin(&self) -> &str {
        &self.coin
    }

    /// The wallet identifier, if set.
    pub fn wallet_id(&self) -> Option<u64> {
        self.wallet_id
    }

    /// The account identifier, if set.
    pub fn account_id(&self) -> Option<u64> {
        self.account_id
    }

    /// Resolve the request path for `operation` on `kind`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use address_api_client::path::{Operation, PathContext, ResourceKind};
    ///
    /// # fn main() -> Result<(), address_api_client::AddressError> {
    /// let ctx = PathContext::new("eth")?.with_wallet(5).with_account(9);
    /// let path = ctx.resolve(ResourceKind::Account, Operation::Send)?;
    /// assert_eq!(path, "coins/eth/wallets/5/accounts/9/send/");
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve(&self, kind: ResourceKind, operation: Operation) -> Result<String, AddressError> {
        let template =
            template(kind, operation).ok_or(AddressError::UnknownOperation { kind, operation })?;

        // The coin listing is the only path without a coin segment.
        if template.scope == Scope::Root {
            return Ok(format!("coins{}", template.suffix));
        }

        // Identifiers are positive; zero never names a resource.
        let require = |id: Option<u64>, identifier: &'static str| match id {
            Some(0) => Err(AddressError::InvalidIdentifier {
                kind,
                operation,
                identifier,
            }),
            Some(id) => Ok(id),
            None => Err(AddressError::MissingIdentifier {
                kind,
                operation,
                identifier,
            }),
        };

        let coin = utf8_percent_encode(&self.coin, PATH_SEGMENT);
        let mut path = format!("coins/{}/", coin);

        if template.scope != Scope::Coin {
            path.push_str("wallets/");
        }
        if matches!(
            template.scope,
            Scope::Wallet | Scope::Accounts | Scope::Account
        ) {
            let wallet_id = require(self.wallet_id, "wallet_id")?;
            path.push_str(&format!("{}/", wallet_id));
        }
        if matches!(template.scope, Scope::Accounts | Scope::Account) {
            path.push_str("accounts/");
        }
        if template.scope == Scope::Account {
            let account_id = require(self.account_id, "account_id")?;
            path.push_str(&format!("{}/", account_id));
        }

        path.push_str(template.suffix);
        Ok(path)
    }
}

/// Resolve a request path from loose identifiers.
///
/// Convenience form of [`PathContext::resolve`].
pub fn resolve_path(
    kind: ResourceKind,
    operation: Operation,
    coin: &str,
    wallet_id: Option<u64>,
    account_id: Option<u64>,
) -> Result<String, AddressError> {
    let ctx = PathContext {
        wallet_id,
        account_id,
        ..PathContext::new(coin)?
    };
    ctx.resolve(kind, operation)
}
