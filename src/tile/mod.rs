mod crud;
mod validation;

pub use crud::{
    create_tile, delete_tile, get_tile, list_tiles, update_tile, HeroTile, RankedTile, TileError,
};
pub use validation::{is_http_url, TileDraft, TileDraftError};
