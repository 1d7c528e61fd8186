//! This module provides the [`GeoBBox`] struct, a geographic bounding box in
//! WGS84 degrees.

use crate::GeoPoint;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A geographic bounding box in WGS84 degrees.
///
/// Invariants, checked at construction: `west <= east`, `south <= north`,
/// longitudes within ±180° and latitudes within ±90°.
///
/// # Examples
///
/// ```rust
/// use tilesample_core::GeoBBox;
///
/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// assert_eq!(bbox.width(), 20.0);
/// assert_eq!(bbox.height(), 10.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	/// Minimum longitude.
	pub west: f64,
	/// Minimum latitude.
	pub south: f64,
	/// Maximum longitude.
	pub east: f64,
	/// Maximum latitude.
	pub north: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north` in degrees.
	///
	/// # Errors
	/// Returns an error if any coordinate is outside its valid range or the
	/// box is inverted.
	pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<GeoBBox> {
		ensure!(west >= -180., "west ({west}) must be >= -180");
		ensure!(south >= -90., "south ({south}) must be >= -90");
		ensure!(east <= 180., "east ({east}) must be <= 180");
		ensure!(north <= 90., "north ({north}) must be <= 90");
		ensure!(west <= east, "west ({west}) must be <= east ({east})");
		ensure!(south <= north, "south ({south}) must be <= north ({north})");
		Ok(GeoBBox {
			west,
			south,
			east,
			north,
		})
	}

	/// Returns the longitudinal extent in degrees.
	#[must_use]
	pub fn width(&self) -> f64 {
		self.east - self.west
	}

	/// Returns the latitudinal extent in degrees.
	#[must_use]
	pub fn height(&self) -> f64 {
		self.north - self.south
	}

	/// Returns `true` if `point` lies within this box, borders included.
	#[must_use]
	pub fn contains(&self, point: &GeoPoint) -> bool {
		point.lon >= self.west && point.lon <= self.east && point.lat >= self.south && point.lat <= self.north
	}

	/// Returns the bounding box as `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoBBox({}, {}, {}, {})", self.west, self.south, self.east, self.north)
	}
}
