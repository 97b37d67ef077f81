//! This crate provides the core raster types for the `monoblit-rs` project.
//!
//! # Components
//!
//! - **`BitPlane`**: a rectangular 1-bit-per-pixel image over owned or
//!   borrowed storage, with clipping and the blit entry points
//! - **`PhaseAlign`**: the carry-propagating fetcher that shifts source
//!   scan bytes into the destination's bit phase
//! - **`Blt`**: the per-byte fetch-logic-store engine with edge masks
//! - **`Rop2` / `Rop1`**: the sixteen binary raster operations and their
//!   unary subset
//!
//! # Examples
//!
//! ```rust
//! use monoblit_types::raster::{BitPlane, Rop1, Rop2};
//!
//! # fn main() -> Result<(), monoblit_types::raster::RasterError> {
//! let mut dst = BitPlane::new();
//! dst.create(16, 16)?;
//!
//! // Whiten a rectangle, then punch an inverted hole into it.
//! assert!(dst.bit_blt_self(2, 2, 12, 12, Rop1::One));
//! assert!(dst.bit_blt_self(6, 6, 4, 4, Rop1::Dn));
//! assert_eq!(dst.get_pixel(2, 2), Some(true));
//! assert_eq!(dst.get_pixel(7, 7), Some(false));
//! # Ok(())
//! # }
//! ```

pub mod raster;

/// `use monoblit_types::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export commonly used raster types at crate root for convenience
pub use raster::{BitPlane, Blt, PhaseAlign, RasterError, Rop1, Rop2, RowIter};
