//! This module provides the [`Rgba`] pixel value and the [`PixelCoord`]
//! position of a pixel within one raster tile.

use crate::{GeoBBox, GeoPoint};
use std::fmt::Debug;

/// One RGBA pixel value, channels in r, g, b, a order.
///
/// Channel values are returned exactly as encoded in the source tile; what
/// they mean (elevation, flood depth, ...) is a convention of the tileset
/// producer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
	/// The red channel.
	#[must_use]
	pub fn r(&self) -> u8 {
		self.0[0]
	}

	/// The green channel.
	#[must_use]
	pub fn g(&self) -> u8 {
		self.0[1]
	}

	/// The blue channel.
	#[must_use]
	pub fn b(&self) -> u8 {
		self.0[2]
	}

	/// The alpha channel.
	#[must_use]
	pub fn a(&self) -> u8 {
		self.0[3]
	}

	/// Returns the channels as `[r, g, b, a]`.
	#[must_use]
	pub fn as_array(&self) -> [u8; 4] {
		self.0
	}
}

impl Debug for Rgba {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Rgba({}, {}, {}, {})", self.0[0], self.0[1], self.0[2], self.0[3])
	}
}

/// A 0-based pixel position inside one raster tile, column `x` and row `y`.
///
/// Row 0 is the northern (top) edge of the tile.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
	/// The column index.
	pub x: u32,
	/// The row index.
	pub y: u32,
}

impl PixelCoord {
	/// Locates the pixel covering `point` within a tile's raster grid.
	///
	/// `bbox` is the tile's geographic bounding box and `tile_size` the tile
	/// edge length in pixels. The fractional position is floored, so a point
	/// exactly on a pixel boundary maps to the pixel whose northwest corner
	/// sits on that boundary. The latitude fraction is flipped because image
	/// rows grow southward while latitude grows northward. Both axes are
	/// clamped into `[0, tile_size - 1]`, so points on the eastern or
	/// northern tile edge never address a pixel outside the grid.
	///
	/// # Examples
	///
	/// ```
	/// use tilesample_core::{GeoBBox, GeoPoint, PixelCoord};
	///
	/// let bbox = GeoBBox::new(-10.0, -10.0, 10.0, 10.0).unwrap();
	/// let nw = GeoPoint::new(-10.0, 10.0).unwrap();
	/// assert_eq!(PixelCoord::from_geo(&nw, &bbox, 256), PixelCoord { x: 0, y: 0 });
	/// ```
	#[must_use]
	pub fn from_geo(point: &GeoPoint, bbox: &GeoBBox, tile_size: u32) -> PixelCoord {
		let size = f64::from(tile_size);
		let width_pct = (point.lon - bbox.west) / bbox.width();
		let height_pct = (point.lat - bbox.south) / bbox.height();

		let x = (size * width_pct).floor();
		let y = (size * (1.0 - height_pct)).floor();

		PixelCoord {
			x: x.min(size - 1.0).max(0.0) as u32,
			y: y.min(size - 1.0).max(0.0) as u32,
		}
	}

	/// Returns the linear offset of this pixel in a row-major grid with
	/// `tile_size` pixels per row.
	#[must_use]
	pub fn linear_index(&self, tile_size: u32) -> usize {
		self.x as usize + self.y as usize * tile_size as usize
	}
}

impl Debug for PixelCoord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "PixelCoord({}, {})", self.x, self.y)
	}
}
