//! Address wallet API client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::auth::{CredentialsProvider, SIGN_PARAM, sign};
use crate::error::{AddressError, TransportError};
use crate::params::ParameterSet;
use crate::path::{Operation, PathContext, ResourceKind, validate_coin};
use crate::transport::{ApiRequest, HttpMethod, HttpTransport, ReqwestTransport};
use crate::types::requests::{archive_accounts_params, wallet_label_params};
use crate::types::{Permission, PermissionsRequest, SendRequest, TransactionsRequest};

/// Base URL for the Address REST API.
pub const ADDRESS_BASE_URL: &str = "https://api.address.so/api/";

/// Immutable connection settings of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every resource path is resolved against. Always ends with `/`.
    pub base_url: Url,
    /// Active coin symbol (e.g. `btc`, `eth`).
    pub coin: String,
}

impl ClientConfig {
    /// Create a configuration, normalizing the base URL to end with `/`.
    pub fn new(base_url: &str, coin: impl Into<String>) -> Result<Self, AddressError> {
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)
        } else {
            Url::parse(&format!("{}/", base_url))
        }
        .map_err(TransportError::from)?;

        let coin = validate_coin(coin.into())?;

        Ok(Self { base_url, coin })
    }
}

/// Client for the Address wallet management API.
///
/// Every operation is scoped to the client's active coin. Mutating operations
/// (sends and permission changes) are signed with the secret token.
///
/// # Example
///
/// ```rust,no_run
/// use address_api_client::AddressClient;
/// use address_api_client::auth::StaticCredentials;
/// use address_api_client::types::SendRequest;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_token", "secret_token"));
///     let client = AddressClient::builder()
///         .coin("eth")
///         .credentials(credentials)
///         .build()?;
///
///     let wallets = client.get_wallets().await?;
///     println!("Wallets: {}", wallets);
///
///     let request = SendRequest::new("1.5".parse()?, "0xabc");
///     client.send_from_account(5, 9, &request).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AddressClient<T = ReqwestTransport> {
    config: ClientConfig,
    root: PathContext,
    credentials: Arc<dyn CredentialsProvider>,
    transport: T,
}

impl AddressClient<ReqwestTransport> {
    /// Create a new client builder.
    pub fn builder() -> AddressClientBuilder {
        AddressClientBuilder::new()
    }
}

impl<T: HttpTransport> AddressClient<T> {
    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn context(&self) -> PathContext {
        self.root.clone()
    }

    /// Build a request without sending it.
    ///
    /// Resolves the path and, for signed operations, appends the `sign`
    /// parameter. All contract errors surface here, before any I/O.
    pub fn prepare_request(
        &self,
        method: HttpMethod,
        kind: ResourceKind,
        operation: Operation,
        ctx: &PathContext,
        params: ParameterSet,
    ) -> Result<ApiRequest, AddressError> {
        let path = ctx.resolve(kind, operation)?;
        let credentials = self.credentials.get_credentials();

        let mut body = params;
        if operation.is_signed() {
            // A caller-supplied `sign` is never part of the signed message.
            body.remove(SIGN_PARAM);
            let secret = credentials
                .expose_secret()
                .ok_or(AddressError::MissingSecret)?;
            let signature = sign(&body, secret)?;
            body.insert(SIGN_PARAM, signature);
        }

        let url = self
            .config
            .base_url
            .join(&path)
            .map_err(TransportError::from)?;

        Ok(ApiRequest {
            method,
            path,
            url,
            api_token: credentials.api_token.clone(),
            body,
        })
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        kind: ResourceKind,
        operation: Operation,
        ctx: &PathContext,
        params: ParameterSet,
    ) -> Result<Value, AddressError> {
        let request = self.prepare_request(method, kind, operation, ctx, params)?;
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            signed = request.is_signed(),
            "dispatching request"
        );
        Ok(self.transport.execute(request).await?)
    }

    // ========== Coins ==========

    /// List all supported coins.
    pub async fn get_coins(&self) -> Result<Value, AddressError> {
        let ctx = self.context();
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Coins,
            Operation::All,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// Get information about the active coin.
    pub async fn get_coin(&self) -> Result<Value, AddressError> {
        let ctx = self.context();
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Coins,
            Operation::Read,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    // ========== Wallets ==========

    /// List all wallets of the active coin.
    pub async fn get_wallets(&self) -> Result<Value, AddressError> {
        let ctx = self.context();
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Wallet,
            Operation::All,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// Get a wallet by ID.
    pub async fn get_wallet(&self, wallet_id: u64) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Wallet,
            Operation::Read,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// Create a wallet with the given label.
    pub async fn create_wallet(&self, label: &str) -> Result<Value, AddressError> {
        let ctx = self.context();
        self.dispatch(
            HttpMethod::Post,
            ResourceKind::Wallet,
            Operation::Create,
            &ctx,
            wallet_label_params(label),
        )
        .await
    }

    /// Rename a wallet.
    pub async fn update_wallet(&self, wallet_id: u64, label: &str) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Put,
            ResourceKind::Wallet,
            Operation::Update,
            &ctx,
            wallet_label_params(label),
        )
        .await
    }

    /// Delete a wallet.
    pub async fn delete_wallet(&self, wallet_id: u64) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Delete,
            ResourceKind::Wallet,
            Operation::Delete,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// List wallet transactions.
    ///
    /// Passing `None` requests the default page of 100 transactions.
    pub async fn get_wallet_transactions(
        &self,
        wallet_id: u64,
        request: Option<&TransactionsRequest>,
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        let params = request.copied().unwrap_or_default().to_params();
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Wallet,
            Operation::Transactions,
            &ctx,
            params,
        )
        .await
    }

    /// Send funds from a wallet. Signed.
    pub async fn send_from_wallet(
        &self,
        wallet_id: u64,
        request: &SendRequest,
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Post,
            ResourceKind::Wallet,
            Operation::Send,
            &ctx,
            request.to_params(),
        )
        .await
    }

    /// Grant a user permissions on a wallet. Signed.
    pub async fn set_permissions(
        &self,
        wallet_id: u64,
        user_id: u64,
        permissions: &[Permission],
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        let request = PermissionsRequest::new(user_id, permissions);
        self.dispatch(
            HttpMethod::Post,
            ResourceKind::Wallet,
            Operation::Permissions,
            &ctx,
            request.to_params(),
        )
        .await
    }

    /// Revoke every permission a user holds on a wallet. Signed.
    pub async fn remove_all_permissions(
        &self,
        wallet_id: u64,
        user_id: u64,
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Post,
            ResourceKind::Wallet,
            Operation::Permissions,
            &ctx,
            PermissionsRequest::remove_all_params(user_id),
        )
        .await
    }

    // ========== Accounts ==========

    /// List the accounts of a wallet.
    pub async fn get_accounts(&self, wallet_id: u64) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Account,
            Operation::All,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// Get an account by ID.
    pub async fn get_account(&self, wallet_id: u64, account_id: u64) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id).with_account(account_id);
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Account,
            Operation::Read,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// Create an account in a wallet.
    pub async fn create_account(&self, wallet_id: u64) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Post,
            ResourceKind::Account,
            Operation::Create,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// Delete an account.
    pub async fn delete_account(
        &self,
        wallet_id: u64,
        account_id: u64,
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id).with_account(account_id);
        self.dispatch(
            HttpMethod::Delete,
            ResourceKind::Account,
            Operation::Delete,
            &ctx,
            ParameterSet::new(),
        )
        .await
    }

    /// Archive several accounts of a wallet at once.
    pub async fn archive_accounts(
        &self,
        wallet_id: u64,
        account_ids: &[u64],
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id);
        self.dispatch(
            HttpMethod::Delete,
            ResourceKind::Account,
            Operation::Archive,
            &ctx,
            archive_accounts_params(account_ids),
        )
        .await
    }

    /// List account transactions.
    ///
    /// Passing `None` requests the default page of 100 transactions.
    pub async fn get_account_transactions(
        &self,
        wallet_id: u64,
        account_id: u64,
        request: Option<&TransactionsRequest>,
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id).with_account(account_id);
        let params = request.copied().unwrap_or_default().to_params();
        self.dispatch(
            HttpMethod::Get,
            ResourceKind::Account,
            Operation::Transactions,
            &ctx,
            params,
        )
        .await
    }

    /// Send funds from an account. Signed.
    pub async fn send_from_account(
        &self,
        wallet_id: u64,
        account_id: u64,
        request: &SendRequest,
    ) -> Result<Value, AddressError> {
        let ctx = self.context().with_wallet(wallet_id).with_account(account_id);
        self.dispatch(
            HttpMethod::Post,
            ResourceKind::Account,
            Operation::Send,
            &ctx,
            request.to_params(),
        )
        .await
    }
}

impl<T> std::fmt::Debug for AddressClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("coin", &self.config.coin)
            .finish()
    }
}

/// Builder for [`AddressClient`].
pub struct AddressClientBuilder {
    base_url: String,
    coin: Option<String>,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl AddressClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: ADDRESS_BASE_URL.to_string(),
            coin: None,
            credentials: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the active coin symbol.
    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent for the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client with the default `reqwest` transport.
    pub fn build(self) -> Result<AddressClient, AddressError> {
        let transport = ReqwestTransport::with_options(self.user_agent.clone(), self.timeout);
        self.build_with_transport(transport)
    }

    /// Build the client with a custom transport.
    pub fn build_with_transport<T: HttpTransport>(
        self,
        transport: T,
    ) -> Result<AddressClient<T>, AddressError> {
        let coin = self.coin.ok_or_else(|| AddressError::InvalidCoin(String::new()))?;
        let config = ClientConfig::new(&self.base_url, coin)?;
        let root = PathContext::new(config.coin.as_str())?;
        let credentials = self.credentials.ok_or(AddressError::MissingCredentials)?;

        Ok(AddressClient {
            config,
            root,
            credentials,
            transport,
        })
    }
}

impl Default for AddressClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
