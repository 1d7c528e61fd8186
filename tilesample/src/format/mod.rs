//! Decoding fetched tile payloads into RGBA pixel grids.

mod png;
mod webp;

use crate::PixelGrid;
use anyhow::Result;
use image::DynamicImage;
use tilesample_core::{Blob, TileFormat};

/// Decodes a fetched tile payload into a [`PixelGrid`] of RGBA values.
pub fn decode_tile(blob: &Blob, format: TileFormat) -> Result<PixelGrid> {
	let image = match format {
		TileFormat::PNG => png::blob2image(blob)?,
		TileFormat::WEBP => webp::blob2image(blob)?,
	};
	image2grid(&image)
}

/// Reshapes a decoded image into the flat RGBA grid, converting non-RGBA
/// color types (palette, grayscale, RGB) on the way.
fn image2grid(image: &DynamicImage) -> Result<PixelGrid> {
	let rgba = image.to_rgba8();
	PixelGrid::from_interleaved_rgba(rgba.width(), rgba.height(), rgba.into_raw())
}
