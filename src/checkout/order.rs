use crate::product::{list_products, ProductError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Add at least one item before checking out")]
    EmptyCart,

    #[error("Variation {0} is unavailable")]
    UnknownVariation(String),

    #[error("WhatsApp number is not configured")]
    WhatsAppNotConfigured,

    #[error("Catalog error: {0}")]
    Catalog(#[from] ProductError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

/// One submitted cart line: ids plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub variation_id: String,
    pub quantity: u32,
}

/// A cart line resolved against the catalog, priced at the current catalog
/// price (never at whatever the client claimed).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_title: String,
    pub variation_name: String,
    pub price_cents: u32,
    pub quantity: u32,
}

/// A fully priced order ready to be rendered into a message.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricedOrder {
    pub lines: Vec<OrderLine>,
    pub total_cents: u64,
}

/// Resolve submitted cart lines against the catalog and price them.
///
/// # Errors
///
/// [`CheckoutError::EmptyCart`] for an empty submission and
/// [`CheckoutError::UnknownVariation`] when any referenced variation is not
/// in the catalog.
pub async fn build_order(
    root: &Path,
    items: &[OrderItemRequest],
) -> Result<PricedOrder, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let products = list_products(root).await?;

    // variation id -> (product title, name, unit price)
    let mut catalog: HashMap<&str, (&str, &str, u32)> = HashMap::new();
    for product in &products {
        for variation in &product.variations {
            catalog.insert(
                variation.id.as_str(),
                (product.title.as_str(), variation.name.as_str(), variation.price_cents),
            );
        }
    }

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let (product_title, variation_name, price_cents) = catalog
            .get(item.variation_id.as_str())
            .copied()
            .ok_or_else(|| CheckoutError::UnknownVariation(item.variation_id.clone()))?;

        lines.push(OrderLine {
            product_title: product_title.to_string(),
            variation_name: variation_name.to_string(),
            price_cents,
            quantity: item.quantity.max(1),
        });
    }

    let total_cents = lines
        .iter()
        .map(|l| u64::from(l.price_cents) * u64::from(l.quantity))
        .sum();

    Ok(PricedOrder { lines, total_cents })
}
