//! HMAC-SHA256 signature generation for mutating Address API requests.
//!
//! The signature is computed over the canonical form encoding of the request
//! parameters:
//!
//! ```text
//! hex(HMAC-SHA256(form_urlencode(params), secret_token))
//! ```
//!
//! and sent as an extra `sign` form field. The server recomputes it from the
//! received body, so the parameters must be encoded exactly as they are sent.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AddressError;
use crate::params::ParameterSet;

type HmacSha256 = Hmac<Sha256>;

/// Name of the form field that carries the signature.
pub const SIGN_PARAM: &str = "sign";

/// Sign a parameter set with the secret token.
///
/// Returns a 64-character lowercase hex string. The parameter set is not
/// modified; appending the result as [`SIGN_PARAM`] is up to the caller.
///
/// # Example
///
/// ```rust
/// use address_api_client::auth::sign;
/// use address_api_client::params::ParameterSet;
///
/// # fn main() -> Result<(), address_api_client::AddressError> {
/// let params = ParameterSet::new()
///     .with("amount", "1.5")
///     .with("recepient", "abc");
/// let signature = sign(&params, "mysecret")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign(params: &ParameterSet, secret: &str) -> Result<String, AddressError> {
    if secret.is_empty() {
        return Err(AddressError::MissingSecret);
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AddressError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(params.to_query_string().as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_params() -> ParameterSet {
        ParameterSet::new()
            .with("amount", "1.5")
            .with("recepient", "abc")
    }

    fn reference_hmac(message: &str, secret: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_signature_matches_hmac_of_query_string() {
        let signature = sign(&send_params(), "mysecret").unwrap();
        assert_eq!(
            signature,
            reference_hmac("amount=1.5&recepient=abc", "mysecret")
        );
    }

    #[test]
    fn test_known_vector() {
        let signature = sign(&send_params(), "mysecret").unwrap();
        assert_eq!(
            signature,
            "0ce62d5f941683f4d15df910f721b6a79340f5742c9f35c74e256571d166c8d1"
        );
    }

    #[test]
    fn test_signature_format() {
        let signature = sign(&send_params(), "mysecret").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_signature_consistency() {
        let sig1 = sign(&send_params(), "mysecret").unwrap();
        let sig2 = sign(&send_params(), "mysecret").unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_key_order() {
        let reordered = ParameterSet::new()
            .with("recepient", "abc")
            .with("amount", "1.5");
        let sig1 = sign(&send_params(), "mysecret").unwrap();
        let sig2 = sign(&reordered, "mysecret").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_list_order() {
        let a = ParameterSet::new().with("accounts", vec!["1".to_string(), "2".to_string()]);
        let b = ParameterSet::new().with("accounts", vec!["2".to_string(), "1".to_string()]);
        assert_ne!(sign(&a, "s").unwrap(), sign(&b, "s").unwrap());
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let sig1 = sign(&send_params(), "secret-a").unwrap();
        let sig2 = sign(&send_params(), "secret-b").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_sign_does_not_modify_params() {
        let params = send_params();
        let before = params.clone();
        sign(&params, "mysecret").unwrap();
        assert_eq!(params, before);
        assert!(!params.contains_key(SIGN_PARAM));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            sign(&send_params(), ""),
            Err(AddressError::MissingSecret)
        ));
    }

    #[test]
    fn test_long_secret_is_accepted() {
        // Keys longer than the SHA-256 block are hashed, never rejected.
        let secret = "k".repeat(200);
        let signature = sign(&send_params(), &secret).unwrap();
        assert_eq!(
            signature,
            reference_hmac("amount=1.5&recepient=abc", &secret)
        );
    }
}
