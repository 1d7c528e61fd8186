//! The decoded pixel buffer of one raster tile.

use anyhow::{Result, ensure};
use std::fmt::Debug;
use tilesample_core::Rgba;

/// A decoded tile image: interleaved RGBA bytes in row-major order, top row
/// first.
///
/// A grid is produced by decoding one fetched tile, read once by the lookup,
/// and dropped; it is never shared or cached across calls.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
	width: u32,
	height: u32,
	data: Vec<u8>,
}

impl PixelGrid {
	/// Wraps an interleaved RGBA byte buffer.
	///
	/// # Errors
	/// Fails if the buffer length is not `width * height * 4`.
	pub fn from_interleaved_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<PixelGrid> {
		let expected = width as usize * height as usize * 4;
		ensure!(
			data.len() == expected,
			"rgba buffer length ({}) must be {expected} for a {width}x{height} tile",
			data.len()
		);
		Ok(PixelGrid { width, height, data })
	}

	/// Returns the pixel at the given linear (row-major) pixel index, or
	/// `None` if the index lies outside the buffer.
	#[must_use]
	pub fn rgba_at(&self, index: usize) -> Option<Rgba> {
		let offset = index.checked_mul(4)?;
		self
			.data
			.get(offset..offset + 4)
			.map(|c| Rgba([c[0], c[1], c[2], c[3]]))
	}

	/// The width of the decoded tile in pixels.
	#[must_use]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// The height of the decoded tile in pixels.
	#[must_use]
	pub fn height(&self) -> u32 {
		self.height
	}
}

impl Debug for PixelGrid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "PixelGrid({}x{})", self.width, self.height)
	}
}
