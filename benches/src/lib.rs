//! Benchmark helper utilities for monoblit-rs
//!
//! This module provides utilities for generating synthetic bit planes and
//! common benchmark helpers for the monoblit-rs project.

use monoblit_types::raster::BitPlane;

/// Generates an owned plane seeded with a deterministic byte pattern
///
/// The pattern mixes runs and alternating bits so shifted blits exercise
/// both carry paths of the fetcher.
pub fn generate_test_plane(width: i32, height: i32) -> BitPlane<'static> {
	let mut plane = BitPlane::new();
	plane.create(width, height).expect("plane extents must be valid");

	for (i, byte) in plane.data_mut().iter_mut().enumerate() {
		*byte = match i % 4 {
			0 => 0xAA,
			1 => 0xF0,
			2 => (i as u8).wrapping_mul(29),
			_ => 0x0F,
		};
	}

	plane
}

/// Common benchmark extents for synthetic planes
pub mod sizes {
	/// Tiny plane: 64x64 (4,096 pixels)
	pub const TINY: (i32, i32) = (64, 64);
	/// Small plane: 256x256 (65,536 pixels)
	pub const SMALL: (i32, i32) = (256, 256);
	/// Medium plane: 512x512 (262,144 pixels)
	pub const MEDIUM: (i32, i32) = (512, 512);
	/// Large plane: 1024x1024 (1,048,576 pixels)
	pub const LARGE: (i32, i32) = (1024, 1024);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_test_plane() {
		let plane = generate_test_plane(64, 64);
		assert_eq!(plane.width(), 64);
		assert_eq!(plane.height(), 64);
		assert_eq!(plane.data().len(), 8 * 64);
		assert_eq!(plane.data()[0], 0xAA);
		assert_eq!(plane.data()[1], 0xF0);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::TINY, (64, 64));
		assert_eq!(sizes::LARGE, (1024, 1024));
	}
}
