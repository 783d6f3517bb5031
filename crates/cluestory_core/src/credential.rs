//! API credential passed per call.

use std::fmt;

/// Bearer credential for the completion endpoint.
///
/// Passed to each call rather than held globally. `Debug` never prints the
/// secret.
///
/// # Examples
///
/// ```
/// use cluestory_core::ApiKey;
///
/// let key = ApiKey::new("sk-secret");
/// assert_eq!(key.expose(), "sk-secret");
/// assert!(!format!("{:?}", key).contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
