use anyhow::{Result, bail};
use image::DynamicImage;
use tilesample_core::Blob;

pub fn blob2image(blob: &Blob) -> Result<DynamicImage> {
	let decoder = webp::Decoder::new(blob.as_slice());
	match decoder.decode() {
		Some(image) => Ok(image.to_image()),
		None => bail!("Failed to decode WebP image"),
	}
}
