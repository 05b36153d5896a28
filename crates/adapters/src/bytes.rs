//! Byte-oriented color adapters: channel arrays and packed words.
//!
//! Both representations are 8-bit per channel, so extraction divides by 255
//! and reconstruction quantizes with `round(channel * 255)`. A round trip
//! through either is exact once a value has been quantized.

use tinct_core::{NativeColor, RgbComponents};

/// Quantizes a unit-interval channel to one byte.
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

/// RGBA byte channels in array order, as in a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbaBytes(pub [u8; 4]);

impl NativeColor for RgbaBytes {
    fn rgb_components(&self) -> RgbComponents {
        let [r, g, b, a] = self.0;
        RgbComponents::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    fn from_rgb_components(components: RgbComponents) -> Self {
        Self([
            quantize(components.red()),
            quantize(components.green()),
            quantize(components.blue()),
            quantize(components.alpha()),
        ])
    }
}

/// RGBA packed big-endian into a word: `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedRgba(pub u32);

impl NativeColor for PackedRgba {
    fn rgb_components(&self) -> RgbComponents {
        RgbaBytes(self.0.to_be_bytes()).rgb_components()
    }

    fn from_rgb_components(components: RgbComponents) -> Self {
        Self(u32::from_be_bytes(
            RgbaBytes::from_rgb_components(components).0,
        ))
    }
}
