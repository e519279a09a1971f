use super::StoreError;
use crate::utils::atomic_write;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the ordering document inside a collection folder.
pub const ORDER_FILE: &str = "order.json";

/// The persisted ordering of a collection.
///
/// This document is the only representation of rank: an item's rank is its
/// 1-based position in `ids`. The version counter is the optimistic
/// concurrency token — a writer passes back the version it read, and a
/// mismatch means another writer got there first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDoc {
    pub version: u64,
    pub ids: Vec<String>,
}

impl Default for OrderDoc {
    fn default() -> Self {
        Self {
            version: 0,
            ids: Vec::new(),
        }
    }
}

fn order_path(dir: &Path) -> PathBuf {
    dir.join(ORDER_FILE)
}

/// Read the ordering document for a collection folder.
///
/// A missing document is an empty ordering at version 0, so freshly
/// initialized collections need no special casing.
pub async fn read_order(dir: &Path) -> Result<OrderDoc, StoreError> {
    let path = order_path(dir);
    if !path.exists() {
        return Ok(OrderDoc::default());
    }
    let content = fs::read_to_string(&path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Atomically replace the ordering document.
///
/// `expected_version` must equal the version currently on disk (the one the
/// caller read before computing the new ordering); otherwise the write fails
/// with [`StoreError::VersionConflict`] and no state changes. The whole new
/// ordering lands in one temp-file + rename, so a concurrent reader only
/// ever sees a complete, dense renumbering.
pub async fn write_order(
    dir: &Path,
    expected_version: u64,
    ids: Vec<String>,
) -> Result<OrderDoc, StoreError> {
    let current = read_order(dir).await?;
    if current.version != expected_version {
        return Err(StoreError::VersionConflict {
            expected: expected_version,
            actual: current.version,
        });
    }

    let next = OrderDoc {
        version: expected_version + 1,
        ids,
    };
    let content = serde_json::to_string_pretty(&next)?;
    atomic_write(&order_path(dir), &content).await?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_order_missing_is_empty_v0() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let order = read_order(temp_dir.path()).await.unwrap();
        assert_eq!(order, OrderDoc::default());
    }

    #[tokio::test]
    async fn test_write_order_bumps_version() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let written = write_order(temp_dir.path(), 0, vec!["a".to_string()])
            .await
            .unwrap();
        assert_eq!(written.version, 1);

        let read_back = read_order(temp_dir.path()).await.unwrap();
        assert_eq!(read_back, written);
    }

    #[tokio::test]
    async fn test_write_order_detects_lost_update() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        // Two writers read version 0; the first commit wins.
        write_order(temp_dir.path(), 0, vec!["a".to_string()])
            .await
            .unwrap();

        let second = write_order(temp_dir.path(), 0, vec!["b".to_string()]).await;
        assert!(matches!(
            second,
            Err(StoreError::VersionConflict {
                expected: 0,
                actual: 1
            })
        ));

        // Loser's state did not land
        let on_disk = read_order(temp_dir.path()).await.unwrap();
        assert_eq!(on_disk.ids, vec!["a".to_string()]);
    }
}
