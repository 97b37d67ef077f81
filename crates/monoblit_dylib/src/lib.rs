//! Forces dynamic linking of `monoblit-rs`.
//!
//! Enabling the `dynamic_linking` feature on the root crate makes the
//! engine link against this dylib instead of compiling `monoblit_internal`
//! statically, which speeds up iterative builds. Do not depend on this
//! crate directly.

pub use monoblit_internal::*;
