//! Tile retrieval over HTTP and XYZ URL templating.

mod tile_fetcher;
mod tile_url;

pub use tile_fetcher::*;
pub use tile_url::*;
