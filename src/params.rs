//! Ordered request parameters and their canonical form encoding.
//!
//! A [`ParameterSet`] is both the form body of a request and the input of the
//! request signature, so its encoding must be reproducible byte for byte:
//!
//! - keys are emitted in insertion order
//! - keys and values are form-url-encoded (space becomes `+`)
//! - list values become repeated `key[]=value` pairs in element order

use std::fmt;

use rust_decimal::Decimal;
use url::form_urlencoded::Serializer;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain text
    Text(String),
    /// Integer
    Int(i64),
    /// Decimal amount, rendered in its canonical string form
    Decimal(Decimal),
    /// List of values, encoded as `key[]=v1&key[]=v2`
    List(Vec<String>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Decimal(d) => write!(f, "{}", d),
            ParamValue::List(items) => write!(f, "[{}]", items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        // Identifiers beyond i64 range are kept verbatim as text.
        i64::try_from(value)
            .map(ParamValue::Int)
            .unwrap_or_else(|_| ParamValue::Text(value.to_string()))
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Decimal(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[u64]> for ParamValue {
    fn from(value: &[u64]) -> Self {
        ParamValue::List(value.iter().map(u64::to_string).collect())
    }
}

/// Insertion-ordered mapping from parameter name to value.
///
/// # Example
///
/// ```rust
/// use address_api_client::params::ParameterSet;
///
/// let params = ParameterSet::new()
///     .with("amount", "1.5")
///     .with("accounts", vec!["4".to_string(), "8".to_string()]);
/// assert_eq!(
///     params.to_query_string(),
///     "amount=1.5&accounts%5B%5D=4&accounts%5B%5D=8"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, consuming and returning the set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter only when `value` is `Some`.
    pub fn with_optional<V: Into<ParamValue>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Insert a parameter.
    ///
    /// Re-inserting an existing key replaces its value but keeps its
    /// original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove a parameter, returning its value. Later entries keep their order.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Look up a parameter by name.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Check whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into raw `(name, value)` pairs, expanding lists into
    /// repeated `name[]` entries.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                ParamValue::List(items) => {
                    let list_key = format!("{}[]", key);
                    pairs.extend(items.iter().map(|item| (list_key.clone(), item.clone())));
                }
                other => pairs.push((key.clone(), other.to_string())),
            }
        }
        pairs
    }

    /// Canonical form-url-encoded serialization.
    pub fn to_query_string(&self) -> String {
        Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let params = ParameterSet::new()
            .with("recepient", "abc")
            .with("amount", "1.5");
        assert_eq!(params.to_query_string(), "recepient=abc&amount=1.5");
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut params = ParameterSet::new().with("a", 1i64).with("b", 2i64);
        params.insert("a", 3i64);
        assert_eq!(params.to_query_string(), "a=3&b=2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_values_are_form_encoded() {
        let params = ParameterSet::new().with("label", "my wallet&co=1");
        assert_eq!(params.to_query_string(), "label=my+wallet%26co%3D1");
    }

    #[test]
    fn test_list_expands_to_repeated_keys() {
        let ids: &[u64] = &[3, 1, 2];
        let params = ParameterSet::new().with("accounts", ids);
        assert_eq!(
            params.to_pairs(),
            vec![
                ("accounts[]".to_string(), "3".to_string()),
                ("accounts[]".to_string(), "1".to_string()),
                ("accounts[]".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        let params = ParameterSet::new()
            .with("user_id", 1i64)
            .with("permissions", Vec::<String>::new());
        assert_eq!(params.to_query_string(), "user_id=1");
    }

    #[test]
    fn test_optional_parameter() {
        let params = ParameterSet::new()
            .with("amount", "1")
            .with_optional("odd_address", None::<String>);
        assert!(!params.contains_key("odd_address"));

        let params = params.with_optional("odd_address", Some("xyz"));
        assert_eq!(params.get("odd_address"), Some(&ParamValue::from("xyz")));
    }

    #[test]
    fn test_decimal_rendering() {
        let amount: Decimal = "1.50".parse().unwrap();
        let params = ParameterSet::new().with("amount", amount.normalize());
        assert_eq!(params.to_query_string(), "amount=1.5");
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut params = ParameterSet::new()
            .with("a", "1")
            .with("b", "2")
            .with("c", "3");
        assert_eq!(params.remove("b"), Some(ParamValue::Text("2".to_string())));
        assert_eq!(params.remove("b"), None);
        assert_eq!(params.to_query_string(), "a=1&c=3");
    }
}
