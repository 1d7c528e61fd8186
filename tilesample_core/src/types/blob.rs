//! This module provides the [`Blob`] struct, a thin wrapper around [`Vec<u8>`]
//! holding one fetched tile payload.

use std::fmt::Debug;

/// A simple wrapper around [`Vec<u8>`] holding one fetched tile payload.
///
/// # Examples
///
/// ```rust
/// use tilesample_core::Blob;
///
/// let blob = Blob::from(vec![0u8, 1, 2, 3]);
/// assert_eq!(blob.len(), 4);
/// assert_eq!(blob.as_slice(), &[0, 1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns the underlying bytes as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Consumes the `Blob`, returning the underlying vector.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the number of bytes.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the blob contains no bytes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Blob(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Blob(value.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({} bytes)", self.0.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_empty() {
		let blob = Blob::new_empty();
		assert_eq!(blob.len(), 0);
		assert!(blob.is_empty());
	}

	#[test]
	fn from_vec_and_slice() {
		let vec = vec![10u8, 20, 30];
		assert_eq!(Blob::from(vec.clone()).into_vec(), vec);
		assert_eq!(Blob::from(vec.as_slice()).as_slice(), &[10, 20, 30]);
	}

	#[test]
	fn debug_format() {
		let blob = Blob::from(vec![0u8; 7]);
		assert_eq!(format!("{blob:?}"), "Blob(7 bytes)");
	}
}
