//! The boundary between the component model and platform color types.
//!
//! A platform adapter supplies three capabilities: extracting RGB channels
//! from its native representation, extracting HSB channels (directly when
//! the platform stores them natively, otherwise through the conversion
//! fallback), and reconstructing the native representation from components.
//! The core carries no dependency on any platform toolkit; adapters live in
//! their own crate and implement this trait.

use crate::convert::{hsb_to_rgb, rgb_to_hsb};
use crate::hsb::HsbComponents;
use crate::rgb::RgbComponents;

/// A platform-native color representation bridged to the component model.
///
/// Only the RGB pair of methods is required. The HSB pair has default
/// implementations that route through the conversion algorithm, so an
/// adapter whose platform exposes no native HSB accessors gets correct
/// behavior for free; platforms that do store HSB natively override them to
/// skip the redundant RGB round trip.
pub trait NativeColor {
    /// Extracts the four RGBA channels into components.
    fn rgb_components(&self) -> RgbComponents;

    /// Reconstructs the native representation from RGB components.
    fn from_rgb_components(components: RgbComponents) -> Self
    where
        Self: Sized;

    /// Extracts HSB components, falling back to RGB conversion.
    fn hsb_components(&self) -> HsbComponents {
        rgb_to_hsb(self.rgb_components())
    }

    /// Reconstructs the native representation from HSB components, falling
    /// back through RGB conversion.
    fn from_hsb_components(components: HsbComponents) -> Self
    where
        Self: Sized,
    {
        Self::from_rgb_components(hsb_to_rgb(components))
    }
}
