//! Three-dimensional tile coordinates in a Web Mercator pyramid
//!
//! This module provides the [`TileCoord`] type for representing tile
//! coordinates in a Web Mercator tile pyramid. It includes methods for:
//! - Creating and validating tile coordinates
//! - Resolving the tile covering a geographic point
//! - Computing a tile's geographic bounding box
//!
//! # Examples
//!
//! ```
//! use tilesample_core::{GeoPoint, TileCoord};
//!
//! // Create a new tile coordinate
//! let coord = TileCoord::new(5, 6, 7).unwrap();
//! assert_eq!(coord.level, 5);
//! assert_eq!(coord.x, 6);
//! assert_eq!(coord.y, 7);
//!
//! // Resolve the tile covering a point
//! let point = GeoPoint::new(13.404954, 52.520008).unwrap();
//! let covering = TileCoord::from_geo(&point, 10).unwrap();
//! assert_eq!((covering.x, covering.y), (550, 335));
//! ```

use crate::{GeoBBox, GeoPoint};
use anyhow::{Result, ensure};
use std::{
	f64::consts::PI,
	fmt::{self, Debug},
};

/// A 3D tile coordinate in a Web Mercator tile pyramid, with zoom level, x, and y indices.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: u32,
	/// The y index of the tile.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > 31 or an index is out of bounds for the level.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= 31, "level ({level}) must be <= 31");
		let max = 2u32.pow(u32::from(level));
		ensure!(x < max, "x ({x}) out of bounds for level {level}");
		ensure!(y < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Resolve the tile covering a geographic point at a given zoom level.
	///
	/// Uses the Web Mercator projection to convert from WGS84 coordinates to
	/// tile indices. The fractional tile position is floored and clamped into
	/// `[0, 2^level - 1]`, so points on the antimeridian or at the Mercator
	/// latitude limit still resolve to a valid tile.
	///
	/// # Errors
	/// Returns an error if `level` > 31.
	///
	/// # Examples
	///
	/// ```
	/// use tilesample_core::{GeoPoint, TileCoord};
	///
	/// let point = GeoPoint::new(139.363375, 35.354857).unwrap();
	/// let coord = TileCoord::from_geo(&point, 17).unwrap();
	/// assert_eq!(coord.x, 116276);
	/// assert_eq!(coord.y, 51759);
	/// ```
	pub fn from_geo(point: &GeoPoint, level: u8) -> Result<TileCoord> {
		ensure!(level <= 31, "level ({level}) must be <= 31");

		let zoom: f64 = 2.0f64.powi(i32::from(level));
		let x = zoom * (point.lon / 360.0 + 0.5);
		let y = zoom * (0.5 - 0.5 * (point.lat * PI / 360.0 + PI / 4.0).tan().ln() / PI);

		TileCoord::new(
			level,
			u32::try_from(x.min(zoom - 1.0).max(0.0).floor() as i64)?,
			u32::try_from(y.min(zoom - 1.0).max(0.0).floor() as i64)?,
		)
	}

	/// Return the geographic bounding box of this tile.
	///
	/// Row index 0 lies at the northern edge of the pyramid, so the tile's
	/// north border is the inverse projection of `y` and its south border
	/// that of `y + 1`.
	#[must_use]
	pub fn to_geo_bbox(&self) -> GeoBBox {
		let zoom: f64 = 2.0f64.powi(i32::from(self.level));
		let lon = |x: u32| (f64::from(x) / zoom - 0.5) * 360.0;
		let lat = |y: u32| ((PI * (1.0 - 2.0 * f64::from(y) / zoom)).exp().atan() / PI - 0.25) * 360.0;

		GeoBBox::new(lon(self.x), lat(self.y + 1), lon(self.x + 1), lat(self.y)).unwrap()
	}
}

/// Custom `Debug` format as `TileCoord(z, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileCoord({}, [{}, {}])", &self.level, &self.x, &self.y))
	}
}
