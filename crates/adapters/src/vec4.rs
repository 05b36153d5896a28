//! Shader-style vector color adapters over [`glam::Vec4`].
//!
//! `RgbaVec` carries red/green/blue/alpha in x/y/z/w; `HsbaVec` carries
//! hue/saturation/brightness/alpha natively, so its HSB accessors skip the
//! RGB round trip entirely. Channels are `f32` on the vector side and widen
//! to `f64` on extraction.

use glam::Vec4;
use tinct_core::{hsb_to_rgb, rgb_to_hsb, HsbComponents, NativeColor, RgbComponents};

/// RGBA color vector: x/y/z/w carry red/green/blue/alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaVec(pub Vec4);

impl NativeColor for RgbaVec {
    fn rgb_components(&self) -> RgbComponents {
        RgbComponents::new(
            f64::from(self.0.x),
            f64::from(self.0.y),
            f64::from(self.0.z),
            f64::from(self.0.w),
        )
    }

    fn from_rgb_components(components: RgbComponents) -> Self {
        Self(Vec4::new(
            components.red() as f32,
            components.green() as f32,
            components.blue() as f32,
            components.alpha() as f32,
        ))
    }
}

/// HSBA color vector: x/y/z/w carry hue/saturation/brightness/alpha.
///
/// The platform representation is natively HSB, so the HSB accessors are
/// direct channel reads and only the RGB pair goes through conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbaVec(pub Vec4);

impl NativeColor for HsbaVec {
    fn rgb_components(&self) -> RgbComponents {
        hsb_to_rgb(self.hsb_components())
    }

    fn from_rgb_components(components: RgbComponents) -> Self {
        Self::from_hsb_components(rgb_to_hsb(components))
    }

    fn hsb_components(&self) -> HsbComponents {
        HsbComponents::new(
            f64::from(self.0.x),
            f64::from(self.0.y),
            f64::from(self.0.z),
            f64::from(self.0.w),
        )
    }

    fn from_hsb_components(components: HsbComponents) -> Self {
        Self(Vec4::new(
            components.hue() as f32,
            components.saturation() as f32,
            components.brightness() as f32,
            components.alpha() as f32,
        ))
    }
}
