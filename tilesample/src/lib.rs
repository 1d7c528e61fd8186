//! # tilesample
//!
//! tilesample samples a single RGBA pixel value from an XYZ raster tileset
//! at a geographic coordinate and zoom level. It resolves the covering tile,
//! fetches and decodes the tile image, and maps the point to the exact pixel
//! inside the tile.
//!
//! ## Features
//! - **Tile addressing**: standard Web Mercator slippy-map math, with the
//!   floor/clamp edge policy applied consistently.
//! - **PNG and WebP tiles**: decoded into a flat RGBA buffer.
//! - **Explicit no-data**: a point whose pixel falls outside the decoded
//!   buffer yields `Ok(None)`, never a silent wrong value.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use tilesample::{RasterTileSampler, core::TileSize};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sampler = RasterTileSampler::new(
//!         "https://disaportal.gsi.go.jp/data/raster/01_flood_l2_shinsuishin/{z}/{x}/{y}.png",
//!         TileSize::Size256,
//!     )?;
//!
//!     match sampler.rgba_at(139.363375, 35.354857, 17).await? {
//!         Some(rgba) => println!("flood depth class encoded as {rgba:?}"),
//!         None => println!("no data at this point"),
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod format;
mod pixel_grid;
mod sampler;

pub use error::SampleError;
pub use pixel_grid::PixelGrid;
pub use sampler::RasterTileSampler;

pub use tilesample_core as core;
