use anyhow::{Result, bail};
use std::fmt::Debug;

/// The pixel edge length of the tiles in a tileset.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum TileSize {
	#[default]
	Size256,
	Size512,
}

impl TileSize {
	/// Creates a `TileSize` from a pixel edge length.
	///
	/// # Errors
	/// Returns an error for anything other than 256 or 512.
	pub fn new(size: u32) -> Result<Self> {
		match size {
			256 => Ok(Self::Size256),
			512 => Ok(Self::Size512),
			_ => bail!("Invalid tile size: {}. Supported sizes are 256 or 512.", size),
		}
	}

	/// Returns the size of the tile edge in pixels.
	pub fn size(&self) -> u32 {
		match self {
			TileSize::Size256 => 256,
			TileSize::Size512 => 512,
		}
	}
}

impl Debug for TileSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TileSize({})", self.size())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new() {
		assert_eq!(TileSize::new(256).unwrap(), TileSize::Size256);
		assert_eq!(TileSize::new(512).unwrap(), TileSize::Size512);
		assert!(TileSize::new(1024).is_err());
		assert!(TileSize::new(0).is_err());
	}

	#[test]
	fn default_is_256() {
		assert_eq!(TileSize::default().size(), 256);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", TileSize::Size512), "TileSize(512)");
	}
}
