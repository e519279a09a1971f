use crate::tile::is_http_url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProductDraftError {
    #[error("A product title is required")]
    TitleTooShort,

    #[error("A description helps customers decide")]
    DescriptionTooShort,

    #[error("Enter a valid image URL")]
    InvalidImageUrl,

    #[error("Add at least one variation")]
    NoVariations,

    #[error("Variation name is required")]
    VariationNameRequired,

    #[error("SKU is too long (max 48 characters)")]
    SkuTooLong,
}

/// Admin-submitted variation fields.
///
/// `id` is present when the draft refers to an existing variation; drafts
/// without an id become new variations. Price is whole cents, non-negative
/// by type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price_cents: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// Admin-submitted product fields, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    pub variations: Vec<VariationDraft>,
}

fn default_is_active() -> bool {
    true
}

impl ProductDraft {
    /// Validate the product fields and every variation.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ProductDraftError`].
    pub fn validate(&self) -> Result<(), ProductDraftError> {
        if self.title.chars().count() < 2 {
            return Err(ProductDraftError::TitleTooShort);
        }
        if self.description.chars().count() < 10 {
            return Err(ProductDraftError::DescriptionTooShort);
        }
        if !is_http_url(&self.image_url) {
            return Err(ProductDraftError::InvalidImageUrl);
        }
        if self.variations.is_empty() {
            return Err(ProductDraftError::NoVariations);
        }
        for variation in &self.variations {
            if variation.name.is_empty() {
                return Err(ProductDraftError::VariationNameRequired);
            }
            if variation.sku.as_deref().is_some_and(|s| s.trim().chars().count() > 48) {
                return Err(ProductDraftError::SkuTooLong);
            }
        }
        Ok(())
    }
}

/// Trim a submitted SKU, mapping blank input to "no SKU".
#[must_use]
pub fn clean_sku(sku: Option<String>) -> Option<String> {
    sku.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
