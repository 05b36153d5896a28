//! Conversion between RGB and HSB component representations.
//!
//! Both directions are pure, total functions: component types pre-clamp
//! their channels, so no invalid input can reach the algorithm and there is
//! no failure mode. Conversion is lossy only at the achromatic boundary
//! (hue and saturation collapse to 0 when max == min), which is why
//! RGB -> HSB -> RGB round-trips within tolerance but the reverse direction
//! is not guaranteed for zero-saturation colors.

use crate::hsb::HsbComponents;
use crate::rgb::RgbComponents;

/// Converts RGB to HSB by max/min/chroma decomposition.
///
/// Brightness is the channel maximum. Achromatic colors (zero chroma) get
/// hue 0 and saturation 0. Otherwise saturation is `chroma / max` and hue is
/// computed per 60-degree segment from whichever channel holds the maximum,
/// expressed as a fraction of a full turn. Alpha passes through unchanged.
pub fn rgb_to_hsb(rgb: RgbComponents) -> HsbComponents {
    let (r, g, b) = (rgb.red(), rgb.green(), rgb.blue());
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let brightness = max;

    if chroma == 0.0 {
        return HsbComponents::new(0.0, 0.0, brightness, rgb.alpha());
    }

    let saturation = chroma / max;
    let hue = if g == max {
        ((b - r) / chroma + 2.0) * 60.0 / 360.0
    } else if b == max {
        ((r - g) / chroma + 4.0) * 60.0 / 360.0
    } else {
        // Red holds the maximum; negative segments wrap to the top sector.
        let segment = (g - b) / chroma;
        (segment + if segment < 0.0 { 6.0 } else { 0.0 }) * 60.0 / 360.0
    };

    HsbComponents::new(hue, saturation, brightness, rgb.alpha())
}

/// Converts HSB to RGB through the standard six-sector color wheel.
///
/// `chroma = brightness * saturation`, `h' = hue * 6`, and
/// `x = chroma * (1 - |h' mod 2 - 1|)`; the sector index `floor(h')` selects
/// which of (chroma, x, 0) lands on each channel, then `m = brightness -
/// chroma` lifts all three. Alpha passes through unchanged. Hue 1.0 (a full
/// turn, legal after clamping) lands in the red sector.
pub fn hsb_to_rgb(hsb: HsbComponents) -> RgbComponents {
    let chroma = hsb.brightness() * hsb.saturation();
    let h_prime = hsb.hue() * 6.0;
    let x = chroma * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());

    let (r, g, b) = match h_prime.floor() as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = hsb.brightness() - chroma;
    RgbComponents::new(r + m, g + m, b + m, hsb.alpha())
}

impl From<HsbComponents> for RgbComponents {
    fn from(hsb: HsbComponents) -> Self {
        hsb_to_rgb(hsb)
    }
}

impl From<RgbComponents> for HsbComponents {
    fn from(rgb: RgbComponents) -> Self {
        rgb_to_hsb(rgb)
    }
}
