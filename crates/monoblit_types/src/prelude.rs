//! Prelude module for `monoblit_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```rust
//! use monoblit_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let plane = BitPlane::new();
//! assert!(plane.is_empty());
//! assert_eq!(Rop2::default(), Rop2::S);
//! ```

// Raster module types
#[doc(inline)]
pub use crate::raster::{
	// Plane and iteration
	BitPlane,
	// Dispatch machinery
	Blt,
	PhaseAlign,
	RasterError,

	// Raster operation codes
	Rop1,
	Rop2,
	RowIter,
};
