//! HSB color components: hue-based adjustments and arithmetic blending.
//!
//! [`HsbComponents`] mirrors [`RgbComponents`](crate::rgb::RgbComponents):
//! an immutable value type with hue/saturation/brightness/alpha channels
//! stored as `f64` in [0, 1]. Hue is a fraction of a full turn (1.0 = 360
//! degrees), not degrees. Constructors clamp, operations return new values.

use serde::{Deserialize, Serialize};

use crate::math::{almost_equal, normalize, TOLERANCE};
use crate::rng::Xorshift64;

/// HSB color with hue/saturation/brightness/alpha channels in [0, 1].
///
/// Channels are private so the clamp-on-construct invariant cannot be
/// bypassed; deserialization re-clamps through [`HsbComponents::new`] for
/// the same reason. Equality is tolerance-based per channel, matching
/// [`RgbComponents`](crate::rgb::RgbComponents).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RawHsb")]
pub struct HsbComponents {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
}

/// Wire shape for deserialization; routed through `new` so untrusted input
/// cannot store out-of-range channels.
#[derive(Deserialize)]
struct RawHsb {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
}

impl From<RawHsb> for HsbComponents {
    fn from(raw: RawHsb) -> Self {
        Self::new(raw.hue, raw.saturation, raw.brightness, raw.alpha)
    }
}

impl HsbComponents {
    /// Opaque white: zero saturation at full brightness.
    pub const WHITE: HsbComponents = HsbComponents {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
        alpha: 1.0,
    };

    /// Opaque black: zero brightness.
    pub const BLACK: HsbComponents = HsbComponents {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        alpha: 1.0,
    };

    /// Creates components from explicit channel values, clamping each into
    /// [0, 1].
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue: normalize(hue),
            saturation: normalize(saturation),
            brightness: normalize(brightness),
            alpha: normalize(alpha),
        }
    }

    /// Creates components with uniformly sampled hue/saturation/brightness
    /// and a caller-supplied alpha.
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

    // -- Channel accessors --

    /// Hue as a fraction of a full turn in [0, 1].
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation in [0, 1].
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Brightness in [0, 1].
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Alpha channel in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    // -- Hue-based adjustments --

    /// Rotates the hue half a turn, wrapping around the color wheel.
    ///
    /// Saturation, brightness, and alpha are unchanged. This is the only
    /// operation that wraps hue; arithmetic blending clamps it linearly.
    pub fn inverted(&self) -> Self {
        let hue = (self.hue * 360.0 + 180.0).rem_euclid(360.0) / 360.0;
        Self::new(hue, self.saturation, self.brightness, self.alpha)
    }

    /// Increases saturation by `percentage` (clamped to [0, 1] before use),
    /// saturating at 1.
    pub fn saturate(&self, percentage: f64) -> Self {
        let p = normalize(percentage);
        Self::new(self.hue, self.saturation + p, self.brightness, self.alpha)
    }

    /// Decreases saturation by `percentage` (clamped to [0, 1] before use),
    /// bottoming out at 0.
    pub fn desaturate(&self, percentage: f64) -> Self {
        let p = normalize(percentage);
        Self::new(self.hue, self.saturation - p, self.brightness, self.alpha)
    }

    /// Decreases brightness by `percentage` (clamped to [0, 1] before use).
    pub fn darken(&self, percentage: f64) -> Self {
        let p = normalize(percentage);
        Self::new(self.hue, self.saturation, self.brightness - p, self.alpha)
    }

    /// Increases brightness by `percentage` (clamped to [0, 1] before use).
    pub fn lighten(&self, percentage: f64) -> Self {
        let p = normalize(percentage);
        Self::new(self.hue, self.saturation, self.brightness + p, self.alpha)
    }

    // -- Arithmetic blending --

    /// Applies `op` channel-wise; alpha participates only when `with_alpha`.
    ///
    /// Hue is treated as a plain linear channel here: results past the 0/1
    /// boundary clamp instead of wrapping the circle, so operations crossing
    /// the boundary shift hue toward an end of the wheel rather than around
    /// it. Use [`inverted`](HsbComponents::inverted) for a wrapping rotation.
    fn combine(&self, other: HsbComponents, with_alpha: bool, op: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            op(self.hue, other.hue),
            op(self.saturation, other.saturation),
            op(self.brightness, other.brightness),
            if with_alpha {
                op(self.alpha, other.alpha)
            } else {
                self.alpha
            },
        )
    }

    /// Channel-wise addition, clamped. Alpha is added only when `with_alpha`,
    /// otherwise kept from `self`.
    pub fn add(&self, other: HsbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a + b)
    }

    /// Channel-wise subtraction, clamped at 0. Alpha semantics as [`add`].
    ///
    /// [`add`]: HsbComponents::add
    pub fn subtract(&self, other: HsbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a - b)
    }

    /// Channel-wise multiplication. Alpha semantics as [`add`].
    ///
    /// [`add`]: HsbComponents::add
    pub fn multiply(&self, other: HsbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a * b)
    }

    /// Channel-wise division. Alpha semantics as [`add`].
    ///
    /// Division by a zero channel follows IEEE-754 into the clamp: `x/0`
    /// saturates to 1 and `0/0` resolves to 0. No error is raised.
    ///
    /// [`add`]: HsbComponents::add
    pub fn divide(&self, other: HsbComponents, with_alpha: bool) -> Self {
        self.combine(other, with_alpha, |a, b| a / b)
    }

    /// Linear interpolation toward `other`: `(1-w)*self + w*other` per
    /// channel, with `weight` clamped to [0, 1] first.
    ///
    /// Alpha interpolates only when `with_alpha`, otherwise it is taken from
    /// `self`. Hue interpolates linearly, not along the shortest arc.
    pub fn mix(&self, other: HsbComponents, weight: f64, with_alpha: bool) -> Self {
        let w = normalize(weight);
        self.combine(other, with_alpha, |a, b| (1.0 - w) * a + w * b)
    }

    /// Per-channel tolerance comparison with an explicit tolerance.
    ///
    /// `PartialEq` uses this with the default [`TOLERANCE`].
    pub fn almost_eq(&self, other: &HsbComponents, tolerance: f64) -> bool {
        almost_equal(self.hue, other.hue, tolerance)
            && almost_equal(self.saturation, other.saturation, tolerance)
            && almost_equal(self.brightness, other.brightness, tolerance)
            && almost_equal(self.alpha, other.alpha, tolerance)
    }
}

impl PartialEq for HsbComponents {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq(other, TOLERANCE)
    }
}
