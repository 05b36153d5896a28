#![deny(unsafe_code)]
//! Core color component model for tinct.
//!
//! Provides the two canonical component representations (`RgbComponents`,
//! `HsbComponents`), the bidirectional conversion between them, the hex
//! string codec, arithmetic blending and perceptual operations, the shared
//! tolerance-equality primitive, the `Xorshift64` PRNG behind the random
//! constructors, and the `NativeColor` platform-adapter boundary.
//!
//! All operations are pure and side-effect-free over immutable `Copy` value
//! types; everything here is freely shareable across threads.

pub mod adapter;
pub mod convert;
pub mod error;
pub mod hsb;
pub mod math;
pub mod rgb;
pub mod rng;

pub use adapter::NativeColor;
pub use convert::{hsb_to_rgb, rgb_to_hsb};
pub use error::ColorError;
pub use hsb::HsbComponents;
pub use math::{almost_equal, normalize, TOLERANCE};
pub use rgb::RgbComponents;
pub use rng::Xorshift64;
