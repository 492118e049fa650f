//! Authentication module for the Address API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - HMAC-SHA256 signatures for mutating requests

mod credentials;
mod signature;

pub use credentials::{
    API_TOKEN_VAR, Credentials, CredentialsProvider, EnvCredentials, SECRET_TOKEN_VAR,
    StaticCredentials,
};
pub use signature::{SIGN_PARAM, sign};
