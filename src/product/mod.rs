mod crud;
mod validation;

pub use crud::{
    create_product, delete_product, get_product, list_active_products, list_products,
    update_product, Product, ProductError, Variation,
};
pub use validation::{clean_sku, ProductDraft, ProductDraftError, VariationDraft};
