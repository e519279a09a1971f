use crate::config::ShopConfig;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Admin PIN required")]
    Unauthorized,
}

/// Capability check consumed before any mutating operation.
///
/// There is no ambient "unlocked" state: every mutator takes the caller's
/// PIN-hash token as an explicit argument and asks the gate once, before the
/// read-modify-write sequence starts.
#[derive(Debug, Clone)]
pub struct AdminGate {
    pin_hash: Option<String>,
}

impl AdminGate {
    /// Build a gate from a configured PIN hash. An empty hash disables
    /// admin access entirely.
    #[must_use]
    pub fn new(pin_hash: Option<String>) -> Self {
        Self {
            pin_hash: pin_hash.filter(|h| !h.is_empty()),
        }
    }

    #[must_use]
    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(config.admin_pin_hash.clone())
    }

    /// Whether the presented token matches the configured PIN hash.
    ///
    /// Always false when no hash is configured or the token is empty.
    #[must_use]
    pub fn is_authorized(&self, token: &str) -> bool {
        match &self.pin_hash {
            Some(expected) => !token.is_empty() && constant_time_eq(expected, token),
            None => false,
        }
    }

    /// Abort with [`AuthError::Unauthorized`] unless the token is valid.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] when the check fails.
    pub fn require(&self, token: &str) -> Result<(), AuthError> {
        if self.is_authorized(token) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

/// Byte-wise comparison that does not short-circuit on the first mismatch.
/// Length is not secret (both sides are 64-char hex digests).
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
