//! RGB color components: hex codec, perceptual math, arithmetic blending.
//!
//! [`RgbComponents`] is an immutable value type with red/green/blue/alpha
//! channels stored as `f64` in [0, 1]. Every constructor clamps its inputs,
//! so no operation can produce or store an out-of-range channel. Operations
//! never mutate; they return new values.
//!
//! Serializes as an uppercase hex string `"#RRGGBBAA"` for human-readable
//! formats. The hex round-trip has 8-bit quantization (1/255 precision loss),
//! which is acceptable since hex colors are inherently 8-bit.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::math::{almost_equal, normalize, TOLERANCE};
use crate::rng::Xorshift64;

/// RGB color with red/green/blue/alpha channels in [0, 1].
///
/// Channels are private so the clamp-on-construct invariant cannot be
/// bypassed by a struct literal; use [`RgbComponents::new`] or any other
/// constructor and read channels back through the accessor methods.
///
/// Equality is tolerance-based per channel (see [`crate::math::almost_equal`]),
/// not bit-exact: round-tripping through the HSB conversion introduces
/// floating-point drift that exact equality would reject. `Eq` is therefore
/// deliberately not implemented.
#[derive(Debug, Clone, Copy)]
pub struct RgbComponents {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl RgbComponents {
    /// Opaque white.
    pub const WHITE: RgbComponents = RgbComponents {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Opaque black.
    pub const BLACK: RgbComponents = RgbComponents {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Creates components from explicit channel values, clamping each into
    /// [0, 1].
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: normalize(red),
            green: normalize(green),
            blue: normalize(blue),
            alpha: normalize(alpha),
        }
    }

    /// Creates components with uniformly sampled red/green/blue channels and
    /// a caller-supplied alpha.
    ///
    /// Intended for fuzz and sanity testing, not simulation.
    pub fn random(rng: &mut Xorshift64, alpha: f64) -> Self {
        Self::new(
            rng.next_channel(),
            rng.next_channel(),
            rng.next_channel(),
            alpha,
        )
    }

    /// Parses a hex color string.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, and `#RRGGBBAA`; the leading `#`
    /// is optional and digits are case-insensitive. 3- and 4-digit forms have
    /// each digit doubled before parsing. 4- and 8-digit forms treat the
    /// trailing byte as alpha (value/255); the others default alpha to 1.0.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit(digits.to_string()));
        }
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            n => return Err(ColorError::InvalidHexLength(n)),
        };
        let channel = |i: usize| -> Result<f64, ColorError> {
            u8::from_str_radix(&expanded[2 * i..2 * i + 2], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| ColorError::InvalidHexDigit(digits.to_string()))
        };
        let red = channel(0)?;
        let green = channel(1)?;
        let blue = channel(2)?;
        let alpha = if expanded.len() == 8 { channel(3)? } else { 1.0 };
        Ok(Self::new(red, green, blue, alpha))
    }

    /// Renders the components as an uppercase hex string.
    ///
    /// Each channel is quantized as `round(channel * 255)` and written as two
    /// zero-padded uppercase hex digits in R, G, B[, A] order. `prefix` is
    /// prepended verbatim; `None` (or an empty string) renders bare digits.
    /// The alpha byte is included only when `with_alpha` is true.
    pub fn to_hex(&self, prefix: Option<&str>, with_alpha: bool) -> String {
        let prefix = prefix.unwrap_or("");
        let r = (self.red * 255.0).round() as u8;
        let g = (self.green * 255.0).round() as u8;
        let b = (self.blue * 255.0).round() as u8;
        if with_alpha {
            let a = (self.alpha * 255.0).round() as u8;
            format!("{prefix}{r:02X}{g:02X}{b:02X}{a:02X}")
        } else {
            format!("{prefix}{r:02X}{g:02X}{b:02X}")
        }
    }

    // -- Channel accessors --

    /// Red channel in [0, 1].
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Green channel in [0, 1].
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel in [0, 1].
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Alpha channel in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    // -- Derived properties --

    /// Perceptual lightness, `(299*r + 587*g + 114*b) / 1000`.
    ///
    /// ITU-R-like weighting: green dominates, blue contributes least.
    pub fn lightness(&self) -> f64 {
        (299.0 * self.red + 587.0 * self.green + 114.0 * self.blue) / 1000.0
    }

    /// True if the perceived lightness is below 0.5.
    pub fn is_dark(&self) -> bool {
        self.lightness() < 0.5
    }

    /// True if the perceived lightness is 0.5 or above.
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// WCAG-style contrast ratio between two colors, always >= 1.
    ///
    /// `(max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)` where L is [`lightness`].
    /// Black against white yields the maximum ratio of 21.
    ///
    /// [`lightness`]: RgbComponents::lightness
    pub fn contrast(&self, other: RgbComponents) -> f64 {
        let l1 = self.lightness();
        let l2 = other.lightness();
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// True if the contrast ratio against `other` exceeds 7, the threshold
    /// for comfortably readable text.
    pub fn has_contrast(&self, other: RgbComponents) -> bool {
        self.contrast(other) > 7.0
    }

    /// Returns the photographic negative, `1 - channel` on red/green/blue.
    ///
    /// Alpha is inverted as well only when `with_alpha` is true, otherwise it
    /// is passed through unchanged.
    pub fn negative(&self, with_alpha: bool) -> Self {
        Self::new(
            1.0 - self.red,
            1.0 - self.green,
            1.0 - self.blue,
            if with_alpha {
                1.0 - self.alpha
            } else {
                self.alpha
            },
        )
    }

    // -- Arithmetic blending --

    /// Applies `op` channel-wise; alpha participates only when `with_alpha`.
    /// The constructor re-clamps, so non-finite results of `op` resolve to a
    /// bound (see [`crate::math::normalize`]).
    fn combine(&self, other: RgbComponents, with_alpha: bool, op: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            op(self.red, other.red),
            op(self.green, other.green),
            op(self.blue, other.blue),
            if with_alpha {
                op(self.alpha, other.alpha)
            } else {
                self.alpha
            },
        )
    }

    /// Channel-wise addition, clamped. Alpha is added only when `with_alpha`,
    /// otherwise kept from `self`.
    pub fn add(&self, other: RgbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a + b)
    }

    /// Channel-wise subtraction, clamped at 0. Alpha semantics as [`add`].
    ///
    /// [`add`]: RgbComponents::add
    pub fn subtract(&self, other: RgbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a - b)
    }

    /// Channel-wise multiplication. Alpha semantics as [`add`].
    ///
    /// [`add`]: RgbComponents::add
    pub fn multiply(&self, other: RgbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a * b)
    }

    /// Channel-wise division. Alpha semantics as [`add`].
    ///
    /// Division by a zero channel follows IEEE-754 into the clamp: `x/0`
    /// saturates to 1 and `0/0` resolves to 0. No error is raised.
    ///
    /// [`add`]: RgbComponents::add
    pub fn divide(&self, other: RgbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a / b)
    }

    /// Linear interpolation toward `other`: `(1-w)*self + w*other` per
    /// channel, with `weight` clamped to [0, 1] first.
    ///
    /// Alpha interpolates only when `with_alpha`, otherwise it is taken from
    /// `self`.
    pub fn mix(&self, other: RgbComponents, weight: f64, with_alpha: bool) -> Self {
        let w = normalize(weight);
        self.combine(other, with_alpha, |a, b| (1.0 - w) * a + w * b)
    }

    /// Per-channel tolerance comparison with an explicit tolerance.
    ///
    /// `PartialEq` uses this with the default [`TOLERANCE`].
    pub fn almost_eq(&self, other: &RgbComponents, tolerance: f64) -> bool {
        almost_equal(self.red, other.red, tolerance)
            && almost_equal(self.green, other.green, tolerance)
            && almost_equal(self.blue, other.blue, tolerance)
            && almost_equal(self.alpha, other.alpha, tolerance)
    }
}

impl PartialEq for RgbComponents {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq(other, TOLERANCE)
    }
}

impl FromStr for RgbComponents {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for RgbComponents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex(Some("#"), true))
    }
}

impl<'de> Deserialize<'de> for RgbComponents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RgbComponents::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
