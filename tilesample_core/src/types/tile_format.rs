//! This module defines the `TileFormat` enum, representing the raster tile
//! formats this pipeline can decode and their associated file extensions.
//!
//! Formats are a closed variant: adding a format means adding a variant and
//! a decoder, not another string comparison.
//!
//! # Examples
//!
//! ```rust
//! use tilesample_core::TileFormat;
//!
//! // Parsing a tile format from a string (case-insensitive)
//! let format = TileFormat::parse_str(".PNG").unwrap();
//! assert_eq!(format, TileFormat::PNG);
//!
//! // Detecting the format from a tile URL
//! let format = TileFormat::from_url("https://tiles.example.org/17/1/2.webp").unwrap();
//! assert_eq!(format, Some(TileFormat::WEBP));
//! ```

use anyhow::{Result, bail};
use std::fmt::{Display, Formatter};

/// Enum representing supported raster tile formats.
///
/// # Variants
/// - `PNG` - PNG image format, the default for raster-encoded value tilesets
/// - `WEBP` - WEBP image format
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TileFormat {
	#[default]
	PNG,
	WEBP,
}

impl TileFormat {
	/// Returns a lowercase string identifier for this tile format.
	pub fn as_str(&self) -> &str {
		match self {
			TileFormat::PNG => "png",
			TileFormat::WEBP => "webp",
		}
	}

	/// Returns the MIME type string associated with this tile format.
	pub fn as_mime_str(&self) -> &str {
		match self {
			TileFormat::PNG => "image/png",
			TileFormat::WEBP => "image/webp",
		}
	}

	/// Attempts to parse a `TileFormat` from a string, ignoring leading dots,
	/// whitespace and case.
	///
	/// # Errors
	/// Returns an error if the format is not recognized.
	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim_matches([' ', '.']) {
			"png" => TileFormat::PNG,
			"webp" => TileFormat::WEBP,
			_ => bail!("Unknown tile format: '{}'", value.trim()),
		})
	}

	/// Detects the tile format from the extension of a tile URL.
	///
	/// The query string and fragment are ignored; the extension is whatever
	/// follows the last `.` of the last path segment. Returns `Ok(None)` when
	/// that segment carries no extension, so callers can fall back to a
	/// default format. A present but unrecognized extension is an error.
	///
	/// # Examples
	///
	/// ```rust
	/// use tilesample_core::TileFormat;
	///
	/// assert_eq!(
	///     TileFormat::from_url("https://tiles.example.org/0/0/0.png?token=abc").unwrap(),
	///     Some(TileFormat::PNG)
	/// );
	/// // domain dots do not count as an extension
	/// assert_eq!(TileFormat::from_url("https://tiles.example.org/0/0/0").unwrap(), None);
	/// assert!(TileFormat::from_url("https://tiles.example.org/0/0/0.jpg").is_err());
	/// ```
	pub fn from_url(url: &str) -> Result<Option<Self>> {
		let path = url.split(['#', '?']).next().unwrap_or(url);
		let segment = path.rsplit('/').next().unwrap_or(path);
		match segment.rfind('.') {
			Some(index) => Ok(Some(TileFormat::parse_str(&segment[index + 1..])?)),
			None => Ok(None),
		}
	}
}

impl Display for TileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
