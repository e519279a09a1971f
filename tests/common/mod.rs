// Shared helpers for the integration test binaries; not every binary uses
// every helper.
#![allow(dead_code)]

use bakeshop_daemon::auth::{hash_pin, AdminGate};
use bakeshop_daemon::product::{ProductDraft, VariationDraft};
use bakeshop_daemon::store::init_shop;
use bakeshop_daemon::tile::TileDraft;
use std::path::Path;
use tempfile::TempDir;

pub const TEST_PIN: &str = "4242";

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Should create temp dir")
}

pub async fn init_test_shop(root: &Path) {
    init_shop(root).await.expect("Should initialize shop");
}

/// A gate configured with the test PIN, plus a valid token for it.
pub fn admin_fixture() -> (AdminGate, String) {
    let token = hash_pin(TEST_PIN);
    (AdminGate::new(Some(token.clone())), token)
}

pub fn tile_draft(title: &str) -> TileDraft {
    TileDraft {
        title: title.to_string(),
        short_text: "Fresh from the oven".to_string(),
        long_text: "A longer story about what makes this bake special".to_string(),
        image_url: "https://img.example.com/tile.jpg".to_string(),
    }
}

pub fn product_draft(title: &str, price_cents: u32) -> ProductDraft {
    ProductDraft {
        title: title.to_string(),
        description: "A bakery favorite, made fresh every morning".to_string(),
        image_url: "https://img.example.com/product.jpg".to_string(),
        is_active: true,
        variations: vec![VariationDraft {
            id: None,
            name: "Standard".to_string(),
            price_cents,
            sku: None,
        }],
    }
}
