use sha2::{Digest, Sha256};

/// Normalize a raw PIN into its SHA-256 hex digest.
///
/// The digest is what travels with admin requests and what the config
/// stores; the raw PIN never leaves the admin's device.
#[must_use]
pub fn hash_pin(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    hex::encode(hasher.finalize())
}
