//! Prelude module for `monoblit_internal`.
//!
//! This module provides a convenient way to import commonly used types and
//! traits.
//!
//! # Examples
//!
//! ```rust
//! use monoblit_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut dst = BitPlane::new();
//! dst.create(16, 16).unwrap();
//! assert!(dst.bit_blt_self(0, 0, 8, 8, Rop1::One));
//! ```

// Re-export everything from monoblit_types::prelude
#[doc(inline)]
pub use monoblit_types::prelude::*;

// Re-export the entire monoblit_types module for advanced usage
#[doc(inline)]
pub use monoblit_types;
