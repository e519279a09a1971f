mod atomic;
mod format;

pub use atomic::atomic_write;
pub use format::format_usd_cents;

use std::path::Path;

/// The name of the bakeshop data folder
pub const SHOP_FOLDER: &str = ".bakeshop";

/// The name of the manifest file
pub const MANIFEST_FILE: &str = "manifest.json";

/// Current daemon version
pub const DAEMON_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the path to the .bakeshop folder
#[must_use]
pub fn get_shop_path(root: &Path) -> std::path::PathBuf {
    root.join(SHOP_FOLDER)
}

/// Get the path to the manifest file
#[must_use]
pub fn get_manifest_path(root: &Path) -> std::path::PathBuf {
    get_shop_path(root).join(MANIFEST_FILE)
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Generate a fresh entity id (UUID v4)
#[must_use]
pub fn new_entity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
