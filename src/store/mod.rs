//! File-backed entity store.
//!
//! Entities live as one JSON document per id under the `.bakeshop/` data
//! folder. The hero tile ordering is a single separate document, rewritten
//! atomically and guarded by a version counter so a lost-update between two
//! concurrent read-compute-write sequences fails loudly instead of silently
//! clobbering the first writer.

mod documents;
mod ordered;

pub use documents::{delete_doc, doc_path, list_docs, read_doc, write_doc};
pub use ordered::{read_order, write_order, OrderDoc};

use crate::config::{write_config, ShopConfig};
use crate::manifest::{create_manifest, read_manifest, write_manifest, ManifestError, ShopManifest};
use crate::utils::get_shop_path;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::info;

/// Folder for hero tile documents (relative to the shop folder).
pub const TILES_DIR: &str = "tiles";

/// Folder for product documents (relative to the shop folder).
pub const PRODUCTS_DIR: &str = "products";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Shop not initialized. Run 'bakeshop-daemon init' first.")]
    NotInitialized,

    #[error("Document {0} not found")]
    DocNotFound(String),

    #[error("Ordering version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },
}

/// Path of the tiles folder for a shop root.
#[must_use]
pub fn tiles_path(root: &Path) -> PathBuf {
    get_shop_path(root).join(TILES_DIR)
}

/// Path of the products folder for a shop root.
#[must_use]
pub fn products_path(root: &Path) -> PathBuf {
    get_shop_path(root).join(PRODUCTS_DIR)
}

/// Fail with [`StoreError::NotInitialized`] unless the shop folder has a
/// manifest, returning it for timestamp upkeep.
pub async fn require_initialized(root: &Path) -> Result<ShopManifest, StoreError> {
    read_manifest(root)
        .await?
        .ok_or(StoreError::NotInitialized)
}

/// Initialize the shop data folder: entity directories, manifest, and a
/// default config file (only when absent, so re-running is harmless).
pub async fn init_shop(root: &Path) -> Result<ShopManifest, StoreError> {
    if let Some(existing) = read_manifest(root).await? {
        info!("Shop already initialized at {}", root.display());
        return Ok(existing);
    }

    fs::create_dir_all(tiles_path(root)).await?;
    fs::create_dir_all(products_path(root)).await?;

    let manifest = create_manifest();
    write_manifest(root, &manifest).await?;

    let config_path = crate::config::config_path(root);
    if !config_path.exists() {
        write_config(root, &ShopConfig::default())
            .await
            .map_err(|e| StoreError::Io(std::io::Error::other(e.to_string())))?;
    }

    info!("Initialized shop data folder at {}", root.display());
    Ok(manifest)
}
