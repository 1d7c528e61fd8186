use anyhow::{Result, anyhow};
use image::{DynamicImage, ImageFormat, load_from_memory_with_format};
use tilesample_core::Blob;

pub fn blob2image(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Png)
		.map_err(|e| anyhow!("Failed to decode PNG image: {e}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::{Rgba, RgbaImage};
	use std::io::Cursor;

	fn encode_png(image: &RgbaImage) -> Blob {
		let mut buffer = Cursor::new(Vec::new());
		DynamicImage::ImageRgba8(image.clone())
			.write_to(&mut buffer, ImageFormat::Png)
			.unwrap();
		Blob::from(buffer.into_inner())
	}

	#[test]
	fn png_roundtrip() {
		let image = RgbaImage::from_fn(16, 16, |x, y| Rgba([x as u8, y as u8, 0, 255]));
		let decoded = blob2image(&encode_png(&image)).unwrap();
		assert_eq!(decoded.to_rgba8().into_raw(), image.into_raw());
	}

	#[test]
	fn rejects_garbage() {
		assert!(blob2image(&Blob::from(vec![0u8; 32])).is_err());
		assert!(blob2image(&Blob::new_empty()).is_err());
	}
}
