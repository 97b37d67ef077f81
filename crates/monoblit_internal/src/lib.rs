//! Internal crate for `monoblit-rs`.
//!
//! This module is separated into its own crate to enable simple dynamic
//! linking for `monoblit`, and should not be used directly.
//!
//! # Examples
//!
//! ```rust
//! use monoblit_internal::prelude::*;
//!
//! // All commonly used types are available
//! let mut plane = BitPlane::new();
//! plane.create(8, 8).unwrap();
//! ```

/// `use monoblit_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export monoblit_types for convenience
pub use monoblit_types;
