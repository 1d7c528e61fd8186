//! Error types for pixel sampling.
//!
//! Provides the [`SampleError`] taxonomy surfaced by
//! [`RasterTileSampler::rgba_at`](crate::RasterTileSampler::rgba_at). Every
//! variant is fatal for the affected call and is never retried internally.
//! A pixel position outside the decoded buffer is NOT an error; the sampler
//! returns `Ok(None)` for it so callers can tell "the service is broken"
//! apart from "this tile has no data at this exact point".

use thiserror::Error;
use tilesample_core::TileFormat;

/// Errors that can occur while sampling a pixel from a raster tileset.
#[derive(Debug, Clone, Error)]
pub enum SampleError {
	/// The point or zoom level cannot be addressed in the Web Mercator tile
	/// pyramid.
	#[error("invalid coordinate: {reason}")]
	InvalidCoordinate {
		/// Why the coordinate was rejected.
		reason: String,
	},

	/// The URL extension names a format this sampler cannot decode.
	#[error("unsupported tile format in url '{url}': {reason}")]
	UnsupportedFormat {
		/// The resolved tile URL.
		url: String,
		/// The underlying format error.
		reason: String,
	},

	/// The HTTP request failed or returned a non-2xx status.
	#[error("fetching tile from '{url}' failed: {reason}")]
	Fetch {
		/// The resolved tile URL.
		url: String,
		/// The underlying transport or status error.
		reason: String,
	},

	/// The fetched payload could not be decoded as the declared format.
	#[error("decoding {format} tile failed: {reason}")]
	Decode {
		/// The format the payload was declared as.
		format: TileFormat,
		/// The underlying decode error.
		reason: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		let err = SampleError::InvalidCoordinate {
			reason: "lat (91) must be <= 85.05112877980659, the Web Mercator latitude limit".to_string(),
		};
		assert!(err.to_string().starts_with("invalid coordinate:"));

		let err = SampleError::Fetch {
			url: "https://tiles.example.org/1/2/3.png".to_string(),
			reason: "connection refused".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"fetching tile from 'https://tiles.example.org/1/2/3.png' failed: connection refused"
		);

		let err = SampleError::Decode {
			format: TileFormat::WEBP,
			reason: "truncated payload".to_string(),
		};
		assert_eq!(err.to_string(), "decoding webp tile failed: truncated payload");
	}

	#[test]
	fn error_trait() {
		fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
		assert_error::<SampleError>();
	}
}
