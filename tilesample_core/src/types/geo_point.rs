//! This module provides the [`GeoPoint`] struct, a validated geographic
//! coordinate in WGS84 degrees.

use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Maximum latitude representable in the Web Mercator projection, in degrees.
pub static MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// A geographic point in WGS84 degrees.
///
/// Construction is validated against the Web Mercator domain: longitude must
/// lie within ±180° and latitude within ±85.05112877980659°. Points outside
/// this range cannot be addressed in an XYZ tile pyramid.
///
/// # Examples
///
/// ```rust
/// use tilesample_core::GeoPoint;
///
/// let point = GeoPoint::new(139.363375, 35.354857).unwrap();
/// assert_eq!(point.lon, 139.363375);
/// assert_eq!(point.lat, 35.354857);
///
/// // The poles lie outside the Web Mercator latitude range.
/// assert!(GeoPoint::new(0.0, 90.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
	/// Longitude in degrees.
	pub lon: f64,
	/// Latitude in degrees.
	pub lat: f64,
}

impl GeoPoint {
	/// Creates a new `GeoPoint` from longitude and latitude in degrees.
	///
	/// # Errors
	/// Returns an error if `lon` is outside `[-180, 180]` or `lat` is outside
	/// the Web Mercator latitude range.
	pub fn new(lon: f64, lat: f64) -> Result<GeoPoint> {
		ensure!(lon >= -180., "lon ({lon}) must be >= -180");
		ensure!(lon <= 180., "lon ({lon}) must be <= 180");
		ensure!(
			lat >= -MAX_MERCATOR_LAT,
			"lat ({lat}) must be >= -{MAX_MERCATOR_LAT}, the Web Mercator latitude limit"
		);
		ensure!(
			lat <= MAX_MERCATOR_LAT,
			"lat ({lat}) must be <= {MAX_MERCATOR_LAT}, the Web Mercator latitude limit"
		);
		Ok(GeoPoint { lon, lat })
	}

	/// Returns the point as a `(lon, lat)` tuple.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.lon, self.lat)
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoPoint({}, {})", self.lon, self.lat)
	}
}
