//! The coordinate-to-pixel sampling pipeline.

use crate::{SampleError, format::decode_tile};
use std::{fmt::Debug, sync::Arc};
use tilesample_core::{
	GeoPoint, PixelCoord, Rgba, TileCoord, TileFormat, TileSize,
	io::{HttpTileFetcher, TileFetcher, TileUrlTemplate},
};

/// Samples RGBA pixel values from an XYZ raster tileset.
///
/// A sampler holds only immutable configuration (the URL template, the tile
/// size and a shareable fetcher), so one instance can serve any number of
/// concurrent [`rgba_at`](Self::rgba_at) calls without locking. Every call
/// owns its intermediate payloads and drops them on completion; tiles are
/// not cached.
///
/// # Examples
///
/// ```rust,no_run
/// use tilesample::{RasterTileSampler, core::TileSize};
///
/// # async fn example() -> anyhow::Result<()> {
/// let sampler = RasterTileSampler::new(
///     "https://tiles.example.org/{z}/{x}/{y}.png",
///     TileSize::Size256,
/// )?;
/// let rgba = sampler.rgba_at(139.363375, 35.354857, 17).await?;
/// # Ok(())
/// # }
/// ```
pub struct RasterTileSampler {
	template: TileUrlTemplate,
	tile_size: TileSize,
	fetcher: Arc<dyn TileFetcher>,
}

impl RasterTileSampler {
	/// Creates a sampler that fetches tiles over HTTP.
	///
	/// # Errors
	/// Returns an error if `url_template` is missing an `{x}`, `{y}` or `{z}`
	/// placeholder, or if the HTTP client cannot be constructed.
	pub fn new(url_template: &str, tile_size: TileSize) -> anyhow::Result<RasterTileSampler> {
		Ok(RasterTileSampler::with_fetcher(
			TileUrlTemplate::new(url_template)?,
			tile_size,
			Arc::new(HttpTileFetcher::new()?),
		))
	}

	/// Creates a sampler with a custom tile fetcher.
	#[must_use]
	pub fn with_fetcher(
		template: TileUrlTemplate,
		tile_size: TileSize,
		fetcher: Arc<dyn TileFetcher>,
	) -> RasterTileSampler {
		RasterTileSampler {
			template,
			tile_size,
			fetcher,
		}
	}

	/// Samples the RGBA value at (`lon`, `lat`) from the covering tile at
	/// `zoom`.
	///
	/// Returns `Ok(None)` when the located pixel position falls outside the
	/// decoded buffer: there is no data at this exact point. That outcome is
	/// deliberately distinct from the failure cases in [`SampleError`].
	pub async fn rgba_at(&self, lon: f64, lat: f64, zoom: u8) -> Result<Option<Rgba>, SampleError> {
		let point = GeoPoint::new(lon, lat).map_err(|e| SampleError::InvalidCoordinate { reason: e.to_string() })?;
		let coord =
			TileCoord::from_geo(&point, zoom).map_err(|e| SampleError::InvalidCoordinate { reason: e.to_string() })?;
		let bbox = coord.to_geo_bbox();

		let url = self.template.url_for(&coord);
		let format = TileFormat::from_url(&url)
			.map_err(|e| SampleError::UnsupportedFormat {
				url: url.clone(),
				reason: e.to_string(),
			})?
			.unwrap_or_default();

		log::debug!("sampling ({lon}, {lat}) at zoom {zoom} from {coord:?} as {format}");

		let blob = self.fetcher.fetch(&url).await.map_err(|e| {
			log::warn!("tile fetch failed: {e:#}");
			SampleError::Fetch {
				url: url.clone(),
				reason: format!("{e:#}"),
			}
		})?;

		let grid = decode_tile(&blob, format).map_err(|e| {
			log::warn!("tile decode failed: {e:#}");
			SampleError::Decode {
				format,
				reason: format!("{e:#}"),
			}
		})?;

		let pixel = PixelCoord::from_geo(&point, &bbox, self.tile_size.size());
		Ok(grid.rgba_at(pixel.linear_index(self.tile_size.size())))
	}
}

impl Debug for RasterTileSampler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "RasterTileSampler({:?}, {:?})", self.template, self.tile_size)
	}
}
