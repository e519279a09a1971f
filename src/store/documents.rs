use super::StoreError;
use crate::utils::atomic_write;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// Path of a single entity document inside its folder.
#[must_use]
pub fn doc_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}.json"))
}

/// Read one entity document by id.
///
/// # Errors
///
/// Returns [`StoreError::DocNotFound`] when the document does not exist.
pub async fn read_doc<T: DeserializeOwned>(dir: &Path, id: &str) -> Result<T, StoreError> {
    let path = doc_path(dir, id);
    if !path.exists() {
        return Err(StoreError::DocNotFound(id.to_string()));
    }
    let content = fs::read_to_string(&path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Write one entity document, replacing it atomically if it exists.
pub async fn write_doc<T: Serialize>(dir: &Path, id: &str, doc: &T) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(doc)?;
    atomic_write(&doc_path(dir, id), &content).await?;
    Ok(())
}

/// Delete one entity document by id.
///
/// # Errors
///
/// Returns [`StoreError::DocNotFound`] when the document does not exist.
pub async fn delete_doc(dir: &Path, id: &str) -> Result<(), StoreError> {
    let path = doc_path(dir, id);
    if !path.exists() {
        return Err(StoreError::DocNotFound(id.to_string()));
    }
    fs::remove_file(&path).await?;
    Ok(())
}

/// List every entity document in a folder.
///
/// Unreadable or non-document files are skipped with a warning rather than
/// failing the whole listing.
pub async fn list_docs<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, StoreError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut docs = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<T>(&content) {
                Ok(doc) => docs.push(doc),
                Err(e) => warn!("Skipping malformed document {}: {e}", path.display()),
            },
            Err(e) => warn!("Skipping unreadable document {}: {e}", path.display()),
        }
    }

    Ok(docs)
}
