use super::validation::{TileDraft, TileDraftError};
use crate::auth::{AdminGate, AuthError};
use crate::manifest::{update_manifest_timestamp, write_manifest};
use crate::ordering::{compute_append, compute_move, compute_remove};
use crate::store::{
    delete_doc, read_doc, read_order, require_initialized, tiles_path, write_doc, write_order,
    StoreError,
};
use crate::utils::{new_entity_id, now_iso};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum TileError {
    #[error("{0}")]
    Unauthorized(#[from] AuthError),

    #[error("{0}")]
    Invalid(#[from] TileDraftError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Tile {0} not found")]
    TileNotFound(String),
}

/// A promotional hero tile.
///
/// Rank is deliberately absent: it lives in the collection's ordering
/// document, never in the tile itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroTile {
    pub id: String,
    pub title: String,
    pub short_text: String,
    pub long_text: String,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A tile joined with its current 1-based rank, for listings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedTile {
    pub rank: u32,
    #[serde(flatten)]
    pub tile: HeroTile,
}

/// Create a hero tile, appending it to the end of the ordering.
pub async fn create_tile(
    root: &Path,
    gate: &AdminGate,
    token: &str,
    draft: TileDraft,
) -> Result<HeroTile, TileError> {
    gate.require(token)?;
    draft.validate()?;

    let mut manifest = require_initialized(root).await?;
    let dir = tiles_path(root);

    let now = now_iso();
    let tile = HeroTile {
        id: new_entity_id(),
        title: draft.title,
        short_text: draft.short_text,
        long_text: draft.long_text,
        image_url: draft.image_url,
        created_at: now.clone(),
        updated_at: now,
    };

    write_doc(&dir, &tile.id, &tile).await?;

    let order = read_order(&dir).await?;
    write_order(&dir, order.version, compute_append(&order.ids, &tile.id)).await?;

    update_manifest_timestamp(&mut manifest);
    write_manifest(root, &manifest).await.map_err(StoreError::from)?;

    info!("Created hero tile {}", tile.id);
    Ok(tile)
}

/// Update a hero tile's fields and, when `desired_index` is given and its
/// clamped value differs from the tile's current position, reorder the
/// collection in one versioned batch write.
pub async fn update_tile(
    root: &Path,
    gate: &AdminGate,
    token: &str,
    id: &str,
    draft: TileDraft,
    desired_index: Option<usize>,
) -> Result<HeroTile, TileError> {
    gate.require(token)?;
    draft.validate()?;

    let mut manifest = require_initialized(root).await?;
    let dir = tiles_path(root);

    let existing: HeroTile = read_doc(&dir, id)
        .await
        .map_err(|e| not_found_or(e, id))?;

    let updated = HeroTile {
        id: existing.id,
        title: draft.title,
        short_text: draft.short_text,
        long_text: draft.long_text,
        image_url: draft.image_url,
        created_at: existing.created_at,
        updated_at: now_iso(),
    };
    write_doc(&dir, id, &updated).await?;

    if let Some(index) = desired_index {
        let order = read_order(&dir).await?;
        let next = compute_move(&order.ids, id, index)
            .map_err(|_| TileError::TileNotFound(id.to_string()))?;
        // No version bump when the move is a no-op
        if next != order.ids {
            write_order(&dir, order.version, next).await?;
        }
    }

    update_manifest_timestamp(&mut manifest);
    write_manifest(root, &manifest).await.map_err(StoreError::from)?;

    Ok(updated)
}

/// Delete a hero tile and renumber the survivors.
pub async fn delete_tile(
    root: &Path,
    gate: &AdminGate,
    token: &str,
    id: &str,
) -> Result<(), TileError> {
    gate.require(token)?;

    let mut manifest = require_initialized(root).await?;
    let dir = tiles_path(root);

    delete_doc(&dir, id).await.map_err(|e| not_found_or(e, id))?;

    let order = read_order(&dir).await?;
    match compute_remove(&order.ids, id) {
        Ok(next) => {
            write_order(&dir, order.version, next).await?;
        }
        Err(_) => {
            // Document existed but was missing from the ordering; nothing to
            // renumber.
            warn!("Deleted tile {id} was not present in the ordering");
        }
    }

    update_manifest_timestamp(&mut manifest);
    write_manifest(root, &manifest).await.map_err(StoreError::from)?;

    info!("Deleted hero tile {id}");
    Ok(())
}

/// Get a single tile by id.
pub async fn get_tile(root: &Path, id: &str) -> Result<HeroTile, TileError> {
    require_initialized(root).await?;
    read_doc(&tiles_path(root), id)
        .await
        .map_err(|e| not_found_or(e, id))
}

/// List all tiles in rank order.
///
/// Documents missing from disk (e.g. an interrupted create) are skipped and
/// the displayed ranks stay dense.
pub async fn list_tiles(root: &Path) -> Result<Vec<RankedTile>, TileError> {
    require_initialized(root).await?;
    let dir = tiles_path(root);

    let order = read_order(&dir).await?;
    let mut tiles = Vec::with_capacity(order.ids.len());

    for id in &order.ids {
        match read_doc::<HeroTile>(&dir, id).await {
            Ok(tile) => tiles.push(tile),
            Err(StoreError::DocNotFound(_)) => {
                warn!("Ordering references missing tile document {id}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(tiles
        .into_iter()
        .zip(1u32..)
        .map(|(tile, rank)| RankedTile { rank, tile })
        .collect())
}

fn not_found_or(e: StoreError, id: &str) -> TileError {
    match e {
        StoreError::DocNotFound(_) => TileError::TileNotFound(id.to_string()),
        other => TileError::Store(other),
    }
}
