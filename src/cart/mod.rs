//! Client-side cart model.
//!
//! Purely in-memory; the storefront front end owns one of these per visitor
//! and submits its lines at checkout. A line is keyed by (product id,
//! variation id) so adding the same variation twice merges quantities.

use serde::{Deserialize, Serialize};

/// Per-line quantity ceiling.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// One cart line: a product variation with a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub product_title: String,
    pub variation_id: String,
    pub variation_name: String,
    pub price_cents: u32,
    pub quantity: u32,
}

/// What a visitor intends to buy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a variation to the cart. An existing line for the same
    /// (product, variation) pair absorbs the quantity, capped at
    /// [`MAX_LINE_QUANTITY`].
    pub fn add(&mut self, line: CartLine) {
        let existing = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id && l.variation_id == line.variation_id);

        match existing {
            Some(found) => {
                found.quantity = found
                    .quantity
                    .saturating_add(line.quantity)
                    .min(MAX_LINE_QUANTITY);
            }
            None => {
                let mut line = line;
                line.quantity = line.quantity.min(MAX_LINE_QUANTITY);
                self.lines.push(line);
            }
        }
    }

    /// Remove the line for a (product, variation) pair, if present.
    pub fn remove(&mut self, product_id: &str, variation_id: &str) {
        self.lines
            .retain(|l| !(l.product_id == product_id && l.variation_id == variation_id));
    }

    /// Set a line's quantity, clamped into `1..=`[`MAX_LINE_QUANTITY`].
    /// Unknown lines are left untouched.
    pub fn update_quantity(&mut self, product_id: &str, variation_id: &str, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id && l.variation_id == variation_id)
        {
            line.quantity = quantity.clamp(1, MAX_LINE_QUANTITY);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price of the cart in cents.
    #[must_use]
    pub fn total_cents(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| u64::from(l.price_cents) * u64::from(l.quantity))
            .sum()
    }
}
