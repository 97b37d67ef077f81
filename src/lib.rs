#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `monoblit-rs` is a monochrome raster engine: 1-bit-per-pixel bit planes
//! composed through masked, phase-aligned bit-block transfers under the
//! sixteen Boolean raster operations.
//!
pub use monoblit_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use monoblit_dylib;
