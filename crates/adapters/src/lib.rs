#![deny(unsafe_code)]
//! Platform color adapters for tinct.
//!
//! Each adapter wraps one host color representation and implements
//! [`NativeColor`](tinct_core::NativeColor): vector colors for shader-style
//! pipelines (`RgbaVec`, `HsbaVec`), byte channels for pixel buffers
//! (`RgbaBytes`), and a packed word (`PackedRgba`). These are thin channel
//! shims; all color math stays in `tinct-core`.

pub mod bytes;
pub mod vec4;

pub use bytes::{PackedRgba, RgbaBytes};
pub use vec4::{HsbaVec, RgbaVec};
