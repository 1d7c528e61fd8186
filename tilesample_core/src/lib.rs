//! Core types and tile I/O for the tilesample workspace.
//!
//! Contains the coordinate and tile types ([`GeoPoint`], [`TileCoord`],
//! [`GeoBBox`], [`PixelCoord`], ...), the raster tile format tag, and the
//! HTTP tile fetcher with its XYZ URL template.

pub mod io;
pub mod types;

pub use types::*;
