//! CIE L\*a\*b\* conversion from 8-bit sRGB.
//!
//! Euclidean distance in L\*a\*b\* approximates perceived color difference
//! far better than distance in RGB or HSL, which is what makes it usable
//! as the matching metric for the named-color resolver.
//!
//! The conversion pipeline is sRGB gamma expansion, the linear-RGB to CIE
//! XYZ matrix, then XYZ to L\*a\*b\* against the D65 reference white. The
//! gamma expansion uses exponent 2.2 rather than the canonical sRGB 2.4:
//! this is kept on purpose so results stay byte-for-byte compatible with
//! existing callers of the original implementation. Treat it as a known
//! quirk, not a bug.

use crate::color::Rgba;

/// D65 reference white point (X, Y, Z).
const D65: (f64, f64, f64) = (0.9505, 1.0, 1.0890);

/// Linearization threshold of the sRGB transfer curve.
const SRGB_LINEAR_CUTOFF: f64 = 0.04045;

/// CIE L\*a\*b\* threshold below which the cube-root segment is replaced
/// by the linear segment (216/24389, rounded as in the original).
const LAB_EPSILON: f64 = 0.008856;

/// A color in CIE 1976 L\*a\*b\* space.
///
/// L is lightness (0 = black, 100 = diffuse white); a and b are the
/// green-red and blue-yellow opponent axes. Derived from [`Rgba`] on
/// demand, never stored as palette data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness (0.0-100.0 for in-gamut sRGB inputs).
    pub l: f64,
    /// Green-red opponent axis.
    pub a: f64,
    /// Blue-yellow opponent axis.
    pub b: f64,
}

impl Lab {
    /// Create a L\*a\*b\* value from raw channels.
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert an RGBA color to L\*a\*b\*, ignoring alpha.
    ///
    /// Total function: defined and finite for every byte-valued input,
    /// and deterministic (identical input yields bitwise-identical
    /// output).
    #[must_use]
    pub fn from_rgba(color: Rgba) -> Self {
        let r = gamma_expand(f64::from(color.r) / 255.0);
        let g = gamma_expand(f64::from(color.g) / 255.0);
        let b = gamma_expand(f64::from(color.b) / 255.0);

        // Linear RGB to CIE XYZ (sRGB primaries, D65).
        let x = 0.4124 * r + 0.3576 * g + 0.1805 * b;
        let y = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        let z = 0.0193 * r + 0.1192 * g + 0.9505 * b;

        let fx = lab_f(x / D65.0);
        let fy = lab_f(y / D65.1);
        let fz = lab_f(z / D65.2);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Squared Euclidean distance to another L\*a\*b\* value.
    ///
    /// The square root is monotonic, so nearest-neighbor comparisons can
    /// skip it.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<Rgba> for Lab {
    fn from(color: Rgba) -> Self {
        Self::from_rgba(color)
    }
}

/// sRGB gamma expansion with the compatibility exponent 2.2.
fn gamma_expand(v: f64) -> f64 {
    if v > SRGB_LINEAR_CUTOFF {
        ((v + 0.055) / 1.055).powf(2.2)
    } else {
        v / 12.92
    }
}

/// The CIE f() transfer used by the XYZ to L\*a\*b\* step.
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_black_is_origin() {
        let lab = Lab::from_rgba(Rgba::BLACK);
        assert_relative_eq!(lab.l, 0.0, epsilon = 1e-9);
        assert_relative_eq!(lab.a, 0.0, epsilon = 1e-9);
        assert_relative_eq!(lab.b, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_white_is_l100() {
        // White lands on L near 100 with near-zero chroma. The 2.2 gamma
        // and the rounded matrix leave a small residual, well under 1.
        let lab = Lab::from_rgba(Rgba::WHITE);
        assert_relative_eq!(lab.l, 100.0, epsilon = 0.5);
        assert_relative_eq!(lab.a, 0.0, epsilon = 0.5);
        assert_relative_eq!(lab.b, 0.0, epsilon = 0.5);
    }

    #[test]
    fn test_primaries_have_expected_signs() {
        let red = Lab::from_rgba(Rgba::RED);
        assert!(red.a > 0.0, "red sits on the +a axis, got a={}", red.a);
        assert!(red.b > 0.0);

        let green = Lab::from_rgba(Rgba::GREEN);
        assert!(green.a < 0.0, "green sits on the -a axis, got a={}", green.a);

        let blue = Lab::from_rgba(Rgba::BLUE);
        assert!(blue.b < 0.0, "blue sits on the -b axis, got b={}", blue.b);
    }

    #[test]
    fn test_lightness_is_monotonic_on_gray_axis() {
        let mut prev = Lab::from_rgba(Rgba::rgb(0, 0, 0)).l;
        for v in 1..=255u8 {
            let l = Lab::from_rgba(Rgba::rgb(v, v, v)).l;
            assert!(l > prev, "L must increase along the gray ramp at v={v}");
            prev = l;
        }
    }

    #[test]
    fn test_gray_axis_has_no_chroma() {
        for v in [0u8, 1, 63, 127, 200, 254, 255] {
            let lab = Lab::from_rgba(Rgba::rgb(v, v, v));
            assert_relative_eq!(lab.a, 0.0, epsilon = 0.5);
            assert_relative_eq!(lab.b, 0.0, epsilon = 0.5);
        }
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = Lab::from_rgba(Rgba::rgb(180, 90, 45));
        let translucent = Lab::from_rgba(Rgba::new(180, 90, 45, 3));
        assert_eq!(opaque, translucent);
    }

    #[test]
    fn test_distance_squared() {
        let a = Lab::new(50.0, 10.0, -10.0);
        let b = Lab::new(53.0, 14.0, -10.0);
        assert_relative_eq!(a.distance_squared(b), 25.0);
        assert_relative_eq!(a.distance_squared(a), 0.0);
        // Symmetric.
        assert_relative_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn test_gamma_cutoff_step_is_bounded() {
        // The 2.2 exponent leaves a small upward step at the cutoff
        // (the canonical 2.4 curve would be continuous there). The step
        // is part of the compatibility contract; pin its size.
        let below = gamma_expand(SRGB_LINEAR_CUTOFF);
        let above = gamma_expand(SRGB_LINEAR_CUTOFF + 1e-9);
        assert!(above > below);
        assert!(above - below < 5e-3);
    }
}
