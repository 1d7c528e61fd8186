use crate::TileCoord;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An XYZ tile URL template with `{x}`, `{y}` and `{z}` placeholders.
///
/// # Examples
///
/// ```rust
/// use tilesample_core::{TileCoord, io::TileUrlTemplate};
///
/// let template = TileUrlTemplate::new("https://tiles.example.org/{z}/{x}/{y}.png").unwrap();
/// let coord = TileCoord::new(17, 116276, 51759).unwrap();
/// assert_eq!(
///     template.url_for(&coord),
///     "https://tiles.example.org/17/116276/51759.png"
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TileUrlTemplate(String);

impl TileUrlTemplate {
	/// Creates a template, checking that all three placeholders are present.
	///
	/// # Errors
	/// Returns an error if `{x}`, `{y}` or `{z}` is missing.
	pub fn new(template: &str) -> Result<TileUrlTemplate> {
		for placeholder in ["{x}", "{y}", "{z}"] {
			ensure!(
				template.contains(placeholder),
				"url template '{template}' is missing the {placeholder} placeholder"
			);
		}
		Ok(TileUrlTemplate(template.to_string()))
	}

	/// Resolves the template for one tile, substituting every occurrence of
	/// each placeholder with the decimal tile coordinate.
	#[must_use]
	pub fn url_for(&self, coord: &TileCoord) -> String {
		self
			.0
			.replace("{x}", &coord.x.to_string())
			.replace("{y}", &coord.y.to_string())
			.replace("{z}", &coord.level.to_string())
	}
}

impl Debug for TileUrlTemplate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TileUrlTemplate({})", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn substitutes_all_placeholders() {
		let template = TileUrlTemplate::new("https://tiles.example.org/{z}/{x}/{y}.png").unwrap();
		let coord = TileCoord::new(5, 3, 4).unwrap();
		assert_eq!(template.url_for(&coord), "https://tiles.example.org/5/3/4.png");
	}

	#[test]
	fn substitutes_repeated_placeholders() {
		let template = TileUrlTemplate::new("https://{z}.example.org/{z}/{x}/{y}").unwrap();
		let coord = TileCoord::new(5, 3, 4).unwrap();
		assert_eq!(template.url_for(&coord), "https://5.example.org/5/3/4");
	}

	#[rstest]
	#[case("https://tiles.example.org/{z}/{x}.png")]
	#[case("https://tiles.example.org/{x}/{y}.png")]
	#[case("https://tiles.example.org/tile.png")]
	fn rejects_missing_placeholders(#[case] template: &str) {
		assert!(TileUrlTemplate::new(template).is_err());
	}
}
