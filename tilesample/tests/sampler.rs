//! End-to-end tests for the sampling pipeline, driven by in-memory fetchers
//! serving encoded fixture tiles.

use anyhow::{Result, bail};
use async_trait::async_trait;
use image::{ImageFormat, Rgba as ImageRgba, RgbaImage};
use std::{
	io::Cursor,
	sync::{Arc, Mutex},
};
use tilesample::{RasterTileSampler, SampleError};
use tilesample_core::{
	Blob, Rgba, TileSize,
	io::{TileFetcher, TileUrlTemplate},
};

/// Serves the same payload for every URL and records what was requested.
struct FixtureFetcher {
	payload: Blob,
	requests: Mutex<Vec<String>>,
}

impl FixtureFetcher {
	fn new(payload: Blob) -> Arc<FixtureFetcher> {
		Arc::new(FixtureFetcher {
			payload,
			requests: Mutex::new(Vec::new()),
		})
	}

	fn requests(&self) -> Vec<String> {
		self.requests.lock().unwrap().clone()
	}
}

#[async_trait]
impl TileFetcher for FixtureFetcher {
	async fn fetch(&self, url: &str) -> Result<Blob> {
		self.requests.lock().unwrap().push(url.to_string());
		Ok(self.payload.clone())
	}
}

struct FailingFetcher;

#[async_trait]
impl TileFetcher for FailingFetcher {
	async fn fetch(&self, url: &str) -> Result<Blob> {
		bail!("HTTP request to '{url}' failed with status 404 Not Found")
	}
}

/// A tile whose pixel at (x, y) is [x, y, 7, 255], so the sampled value
/// reveals which pixel was read.
fn gradient_image(size: u32) -> RgbaImage {
	RgbaImage::from_fn(size, size, |x, y| ImageRgba([x as u8, y as u8, 7, 255]))
}

fn gradient_png(size: u32) -> Blob {
	let mut buffer = Cursor::new(Vec::new());
	image::DynamicImage::ImageRgba8(gradient_image(size))
		.write_to(&mut buffer, ImageFormat::Png)
		.unwrap();
	Blob::from(buffer.into_inner())
}

fn gradient_webp(size: u32) -> Blob {
	let image = gradient_image(size);
	let encoder = webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height());
	Blob::from(encoder.encode_lossless().to_vec())
}

fn sampler_with(template: &str, tile_size: TileSize, fetcher: Arc<dyn TileFetcher>) -> RasterTileSampler {
	RasterTileSampler::with_fetcher(TileUrlTemplate::new(template).unwrap(), tile_size, fetcher)
}

#[tokio::test]
async fn samples_the_center_pixel_of_the_world_tile() {
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size256,
		fetcher.clone(),
	);

	let rgba = sampler.rgba_at(0.0, 0.0, 0).await.unwrap();
	assert_eq!(rgba, Some(Rgba([128, 128, 7, 255])));
	assert_eq!(fetcher.requests(), vec!["https://tiles.example.org/0/0/0.png"]);
}

#[tokio::test]
async fn samples_a_deep_zoom_tile() {
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size256,
		fetcher.clone(),
	);

	// tile 17/116276/51759, pixel (168, 68)
	let rgba = sampler.rgba_at(139.363375, 35.354857, 17).await.unwrap();
	assert_eq!(rgba, Some(Rgba([168, 68, 7, 255])));
	assert_eq!(fetcher.requests(), vec!["https://tiles.example.org/17/116276/51759.png"]);
}

#[tokio::test]
async fn sampling_is_deterministic() {
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size256,
		fetcher,
	);

	let first = sampler.rgba_at(11.33, 47.25, 12).await.unwrap();
	let second = sampler.rgba_at(11.33, 47.25, 12).await.unwrap();
	assert!(first.is_some());
	assert_eq!(first, second);
}

#[tokio::test]
async fn samples_webp_tiles() {
	let fetcher = FixtureFetcher::new(gradient_webp(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.webp",
		TileSize::Size256,
		fetcher,
	);

	let rgba = sampler.rgba_at(0.0, 0.0, 0).await.unwrap();
	assert_eq!(rgba, Some(Rgba([128, 128, 7, 255])));
}

#[tokio::test]
async fn extensionless_urls_default_to_png() {
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}",
		TileSize::Size256,
		fetcher,
	);

	let rgba = sampler.rgba_at(0.0, 0.0, 0).await.unwrap();
	assert_eq!(rgba, Some(Rgba([128, 128, 7, 255])));
}

#[tokio::test]
async fn tile_size_512_addresses_the_finer_grid() {
	let fetcher = FixtureFetcher::new(gradient_png(512));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size512,
		fetcher,
	);

	let rgba = sampler.rgba_at(0.0, 0.0, 0).await.unwrap();
	// 512-pixel gradient wraps its u8 channel at column/row 256
	assert_eq!(rgba, Some(Rgba([0, 0, 7, 255])));
}

#[tokio::test]
async fn unknown_extension_is_an_unsupported_format_error() {
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.jpg",
		TileSize::Size256,
		fetcher.clone(),
	);

	let err = sampler.rgba_at(0.0, 0.0, 0).await.unwrap_err();
	assert!(matches!(err, SampleError::UnsupportedFormat { .. }), "got {err:?}");
	// format detection happens before any request is made
	assert!(fetcher.requests().is_empty());
}

#[tokio::test]
async fn out_of_range_latitude_is_an_invalid_coordinate_error() {
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size256,
		fetcher,
	);

	let err = sampler.rgba_at(0.0, 90.0, 5).await.unwrap_err();
	assert!(matches!(err, SampleError::InvalidCoordinate { .. }), "got {err:?}");
}

#[tokio::test]
async fn too_deep_zoom_is_an_invalid_coordinate_error() {
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size256,
		fetcher,
	);

	let err = sampler.rgba_at(0.0, 0.0, 32).await.unwrap_err();
	assert!(matches!(err, SampleError::InvalidCoordinate { .. }), "got {err:?}");
}

#[tokio::test]
async fn failed_fetches_surface_as_fetch_errors() {
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size256,
		Arc::new(FailingFetcher),
	);

	let err = sampler.rgba_at(0.0, 0.0, 0).await.unwrap_err();
	match err {
		SampleError::Fetch { url, reason } => {
			assert_eq!(url, "https://tiles.example.org/0/0/0.png");
			assert!(reason.contains("404"));
		}
		other => panic!("expected a fetch error, got {other:?}"),
	}
}

#[tokio::test]
async fn malformed_payloads_surface_as_decode_errors() {
	let fetcher = FixtureFetcher::new(Blob::from(vec![0u8; 64]));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size256,
		fetcher,
	);

	let err = sampler.rgba_at(0.0, 0.0, 0).await.unwrap_err();
	assert!(matches!(err, SampleError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn pixel_beyond_the_decoded_buffer_is_no_data() {
	// the tileset claims 512-pixel tiles but serves 256-pixel images, so
	// southern pixel positions land beyond the decoded buffer
	let fetcher = FixtureFetcher::new(gradient_png(256));
	let sampler = sampler_with(
		"https://tiles.example.org/{z}/{x}/{y}.png",
		TileSize::Size512,
		fetcher,
	);

	let rgba = sampler.rgba_at(0.0, -40.0, 0).await.unwrap();
	assert_eq!(rgba, None);
}

/// Samples the live GSI flood-depth tileset.
#[tokio::test]
#[ignore = "requires network access to disaportal.gsi.go.jp"]
async fn live_gsi_flood_tileset() {
	let sampler = RasterTileSampler::new(
		"https://disaportal.gsi.go.jp/data/raster/01_flood_l2_shinsuishin/{z}/{x}/{y}.png",
		TileSize::Size256,
	)
	.unwrap();

	let rgba = sampler.rgba_at(139.363375, 35.354857, 17).await.unwrap().unwrap();
	assert_eq!(rgba.r(), 255);
	assert_eq!(rgba.g(), 216);
	assert_eq!(rgba.b(), 192);
}
