use super::validation::{clean_sku, ProductDraft, ProductDraftError, VariationDraft};
use crate::auth::{AdminGate, AuthError};
use crate::manifest::{update_manifest_timestamp, write_manifest};
use crate::store::{
    delete_doc, list_docs, products_path, read_doc, require_initialized, write_doc, StoreError,
};
use crate::utils::{new_entity_id, now_iso};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ProductError {
    #[error("{0}")]
    Unauthorized(#[from] AuthError),

    #[error("{0}")]
    Invalid(#[from] ProductDraftError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Product {0} not found")]
    ProductNotFound(String),
}

/// A purchasable size/flavor of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub id: String,
    pub name: String,
    pub price_cents: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub created_at: String,
}

/// A catalog product with its variations embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub variations: Vec<Variation>,
}

/// Create a product with fresh ids for it and every variation.
pub async fn create_product(
    root: &Path,
    gate: &AdminGate,
    token: &str,
    draft: ProductDraft,
) -> Result<Product, ProductError> {
    gate.require(token)?;
    draft.validate()?;

    let mut manifest = require_initialized(root).await?;

    let now = now_iso();
    let variations = draft
        .variations
        .into_iter()
        .map(|v| Variation {
            id: new_entity_id(),
            name: v.name,
            price_cents: v.price_cents,
            sku: clean_sku(v.sku),
            created_at: now.clone(),
        })
        .collect();

    let product = Product {
        id: new_entity_id(),
        title: draft.title,
        description: draft.description,
        image_url: draft.image_url,
        is_active: draft.is_active,
        created_at: now.clone(),
        updated_at: now,
        variations,
    };

    write_doc(&products_path(root), &product.id, &product).await?;

    update_manifest_timestamp(&mut manifest);
    write_manifest(root, &manifest).await.map_err(StoreError::from)?;

    info!("Created product {}", product.id);
    Ok(product)
}

/// Update a product, merging its variations with the submitted drafts.
///
/// Drafts carrying the id of an existing variation update it in place and
/// keep its creation timestamp; existing variations absent from the drafts
/// are pruned; drafts without a matching id become new variations.
pub async fn update_product(
    root: &Path,
    gate: &AdminGate,
    token: &str,
    id: &str,
    draft: ProductDraft,
) -> Result<Product, ProductError> {
    gate.require(token)?;
    draft.validate()?;

    let mut manifest = require_initialized(root).await?;
    let dir = products_path(root);

    let existing: Product = read_doc(&dir, id)
        .await
        .map_err(|e| not_found_or(e, id))?;

    let now = now_iso();
    let variations = merge_variations(&existing.variations, draft.variations, &now);

    let updated = Product {
        id: existing.id,
        title: draft.title,
        description: draft.description,
        image_url: draft.image_url,
        is_active: draft.is_active,
        created_at: existing.created_at,
        updated_at: now,
        variations,
    };
    write_doc(&dir, id, &updated).await?;

    update_manifest_timestamp(&mut manifest);
    write_manifest(root, &manifest).await.map_err(StoreError::from)?;

    Ok(updated)
}

/// Delete a product and its embedded variations.
pub async fn delete_product(
    root: &Path,
    gate: &AdminGate,
    token: &str,
    id: &str,
) -> Result<(), ProductError> {
    gate.require(token)?;

    let mut manifest = require_initialized(root).await?;
    delete_doc(&products_path(root), id)
        .await
        .map_err(|e| not_found_or(e, id))?;

    update_manifest_timestamp(&mut manifest);
    write_manifest(root, &manifest).await.map_err(StoreError::from)?;

    info!("Deleted product {id}");
    Ok(())
}

/// Get a single product by id.
pub async fn get_product(root: &Path, id: &str) -> Result<Product, ProductError> {
    require_initialized(root).await?;
    read_doc(&products_path(root), id)
        .await
        .map_err(|e| not_found_or(e, id))
}

/// Admin listing: every product, newest first, variations oldest first.
pub async fn list_products(root: &Path) -> Result<Vec<Product>, ProductError> {
    require_initialized(root).await?;

    let mut products: Vec<Product> = list_docs(&products_path(root)).await?;
    for product in &mut products {
        product.variations.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    }
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(products)
}

/// Storefront listing: active products, title ascending, variations
/// cheapest first.
pub async fn list_active_products(root: &Path) -> Result<Vec<Product>, ProductError> {
    require_initialized(root).await?;

    let mut products: Vec<Product> = list_docs(&products_path(root)).await?;
    products.retain(|p| p.is_active);
    for product in &mut products {
        product.variations.sort_by_key(|v| v.price_cents);
    }
    products.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(products)
}

fn merge_variations(
    existing: &[Variation],
    drafts: Vec<VariationDraft>,
    now: &str,
) -> Vec<Variation> {
    drafts
        .into_iter()
        .map(|draft| {
            let kept = draft
                .id
                .as_deref()
                .and_then(|id| existing.iter().find(|v| v.id == id));
            match kept {
                Some(original) => Variation {
                    id: original.id.clone(),
                    name: draft.name,
                    price_cents: draft.price_cents,
                    sku: clean_sku(draft.sku),
                    created_at: original.created_at.clone(),
                },
                // Unknown or absent id: a brand new variation
                None => Variation {
                    id: new_entity_id(),
                    name: draft.name,
                    price_cents: draft.price_cents,
                    sku: clean_sku(draft.sku),
                    created_at: now.to_string(),
                },
            }
        })
        .collect()
}

fn not_found_or(e: StoreError, id: &str) -> ProductError {
    match e {
        StoreError::DocNotFound(_) => ProductError::ProductNotFound(id.to_string()),
        other => ProductError::Store(other),
    }
}
