//! Monochrome raster engine for the `monoblit-rs` project.
//!
//! This module provides a 1-bit-per-pixel bitmap type together with a
//! bit-block transfer (blit) primitive that composes a source rectangle
//! onto a destination rectangle under one of sixteen Boolean raster
//! operations.
//!
//! # Bit Layout
//!
//! Scan bytes are packed left-to-right; within each byte the most
//! significant bit is the leftmost pixel. Rows are contiguous with stride
//! `row_bytes = ceil(width / 8)`.
//!
//! | Pixel | Byte | Bit |
//! |-------|------|-----|
//! | (0, y)  | `row_bytes * y`     | 7 |
//! | (7, y)  | `row_bytes * y`     | 0 |
//! | (8, y)  | `row_bytes * y + 1` | 7 |
//! | (x, y)  | `row_bytes * y + (x >> 3)` | `7 - (x & 7)` |
//!
//! A bit value of 0 is black, 1 is white.
//!
//! # Components
//!
//! - [`BitPlane`]: storage, clipping and the `bit_blt` entry points.
//! - [`PhaseAlign`]: shifts source bytes into the destination's bit phase.
//! - [`Blt`]: the per-byte fetch-logic-store engine with edge masks.
//! - [`Rop2`] / [`Rop1`]: the binary and unary raster operation codes.
//!
//! # Usage Examples
//!
//! ## Copying a rectangle between planes
//!
//! ```rust
//! use monoblit_types::raster::{BitPlane, Rop2};
//!
//! # fn main() -> Result<(), monoblit_types::raster::RasterError> {
//! let mut pattern = [0x40u8, 0x80];
//! let src = BitPlane::from_buffer(2, 2, &mut pattern)?;
//!
//! let mut dst = BitPlane::new();
//! dst.create(8, 8)?;
//!
//! assert!(dst.bit_blt(0, 0, 2, 2, &src, 0, 0, Rop2::S));
//! assert_eq!(dst.get_pixel(1, 0), Some(true));
//! # Ok(())
//! # }
//! ```
//!
//! ## Unary operations on a plane
//!
//! ```rust
//! use monoblit_types::raster::{BitPlane, Rop1};
//!
//! # fn main() -> Result<(), monoblit_types::raster::RasterError> {
//! let mut plane = BitPlane::new();
//! plane.create(8, 1)?;
//!
//! // Whiten five pixels, then invert the whole row.
//! assert!(plane.bit_blt_self(0, 0, 5, 1, Rop1::One));
//! assert!(plane.bit_blt_self(0, 0, 8, 1, Rop1::Dn));
//! assert_eq!(plane.data(), &[0x07]);
//! # Ok(())
//! # }
//! ```

mod error;

pub mod blt;
pub mod phase;
pub mod plane;
pub mod rop;


// Re-export the engine surface at module level
pub use blt::Blt;
pub use error::RasterError;
pub use phase::PhaseAlign;
pub use plane::{BitPlane, RowIter};
pub use rop::{Rop1, Rop2};
