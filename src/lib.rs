pub mod auth;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod ordering;
pub mod product;
pub mod store;
pub mod tile;
pub mod upload;
pub mod utils;

// Re-export commonly used types
pub use auth::{hash_pin, AdminGate, AuthError};
pub use cart::{Cart, CartLine, MAX_LINE_QUANTITY};
pub use checkout::{
    build_checkout_email, build_order, build_whatsapp_message, build_whatsapp_redirect,
    CheckoutContact, CheckoutError, ContactError, ContactForm, OrderItemRequest, OrderLine,
    OutboundEmail, PricedOrder,
};
pub use config::{load_config, write_config, ConfigError, ShopConfig};
pub use manifest::{read_manifest, write_manifest, ManifestError, ShopManifest};
pub use ordering::{compute_append, compute_move, compute_remove, ranks, OrderingError};
pub use product::{
    create_product, delete_product, get_product, list_active_products, list_products,
    update_product, Product, ProductDraft, ProductDraftError, ProductError, Variation,
    VariationDraft,
};
pub use store::{init_shop, OrderDoc, StoreError};
pub use tile::{
    create_tile, delete_tile, get_tile, list_tiles, update_tile, HeroTile, RankedTile, TileDraft,
    TileDraftError, TileError,
};
pub use upload::{
    authorize_upload, CompletedUpload, UploadError, UploadKind, UploadRequest, MAX_IMAGE_BYTES,
};
