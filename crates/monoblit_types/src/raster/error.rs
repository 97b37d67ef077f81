//! Error types for plane construction and raster-op decoding.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur when constructing, cloning or configuring bit planes
#[derive(Debug, Error)]
pub enum RasterError {
	/// Backing buffer is too small for the requested extents
	#[error("Insufficient store: expected at least {expected} bytes, got {actual} bytes")]
	InsufficientStore {
		/// Minimum number of bytes the extents require
		expected: usize,
		/// Actual number of bytes provided
		actual: usize,
	},

	/// Extents reduce to an empty plane after absolutisation
	#[error("Invalid extent: {cx}x{cy}")]
	InvalidExtent {
		/// Requested width in pixels
		cx: i32,
		/// Requested height in pixels
		cy: i32,
	},

	/// Raster operation code outside the defined range
	#[error("Invalid raster operation code: {0}")]
	InvalidRop(u8),

	/// Allocation failure
	#[error(transparent)]
	Alloc(#[from] TryReserveError),
}
