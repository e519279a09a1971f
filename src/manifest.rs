use crate::utils::{get_manifest_path, now_iso, DAEMON_VERSION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Marker document for an initialized shop data folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopManifest {
    pub schema_version: u32,
    pub daemon_version: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Read the manifest from the shop root
pub async fn read_manifest(root: &Path) -> Result<Option<ShopManifest>, ManifestError> {
    let manifest_path = get_manifest_path(root);

    if !manifest_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&manifest_path).await?;
    let manifest: ShopManifest = serde_json::from_str(&content)?;
    Ok(Some(manifest))
}

/// Write the manifest to the shop root
pub async fn write_manifest(root: &Path, manifest: &ShopManifest) -> Result<(), ManifestError> {
    let manifest_path = get_manifest_path(root);
    let content = serde_json::to_string_pretty(manifest)?;
    fs::write(&manifest_path, content).await?;
    Ok(())
}

/// Create a new empty manifest
#[must_use]
pub fn create_manifest() -> ShopManifest {
    let now = now_iso();
    ShopManifest {
        schema_version: 1,
        daemon_version: DAEMON_VERSION.to_string(),
        created_at: now.clone(),
        updated_at: now,
    }
}

/// Update the manifest timestamp
pub fn update_manifest_timestamp(manifest: &mut ShopManifest) {
    manifest.updated_at = now_iso();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_manifest() {
        let manifest = create_manifest();

        assert_eq!(manifest.schema_version, 1);
        assert_eq!(manifest.daemon_version, DAEMON_VERSION);
        assert!(!manifest.created_at.is_empty());
        assert!(!manifest.updated_at.is_empty());
    }

    #[test]
    fn test_manifest_serialization() {
        let manifest = create_manifest();

        let json = serde_json::to_string(&manifest).expect("Should serialize");
        let deserialized: ShopManifest = serde_json::from_str(&json).expect("Should deserialize");

        assert_eq!(manifest.schema_version, deserialized.schema_version);
        assert_eq!(manifest.daemon_version, deserialized.daemon_version);
    }

    #[test]
    fn test_update_manifest_timestamp_changes_value() {
        let mut manifest = create_manifest();
        manifest.updated_at = "2020-01-01T00:00:00+00:00".to_string();
        update_manifest_timestamp(&mut manifest);
        assert_ne!(manifest.updated_at, "2020-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_read_manifest_missing_returns_none() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = read_manifest(temp_dir.path()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_manifest() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        tokio::fs::create_dir_all(crate::utils::get_shop_path(temp_dir.path()))
            .await
            .unwrap();

        let manifest = create_manifest();
        write_manifest(temp_dir.path(), &manifest).await.unwrap();

        let read_back = read_manifest(temp_dir.path()).await.unwrap().unwrap();
        assert_eq!(read_back.schema_version, manifest.schema_version);
    }
}
