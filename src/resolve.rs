//! Nearest-known-color search over a palette.
//!
//! A lookup is a single linear scan over the palette's precomputed
//! L\*a\*b\* table with squared Euclidean distance. The scan compares with
//! strict less-than, so an exact distance tie keeps the entry that
//! appears earlier in presentation order. Pure and deterministic, with
//! no failure paths: palettes are non-empty by construction.

use crate::color::Rgba;
use crate::lab::Lab;
use crate::palette::{NamedColor, Palette};

/// The result of a nearest-color lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    /// The winning palette entry.
    pub entry: &'a NamedColor,
    /// Squared L\*a\*b\* distance between the query and the entry.
    pub distance_squared: f64,
}

impl Palette {
    /// Find the entry perceptually closest to `color`, ignoring alpha.
    ///
    /// Linear scan in presentation order; on exactly equal distances the
    /// earlier entry wins.
    #[must_use]
    pub fn nearest(&self, color: Rgba) -> Match<'_> {
        let target = Lab::from_rgba(color);

        let mut it = self.iter_lab();
        let (first, first_lab) = it
            .next()
            .expect("palette is non-empty by construction");

        let mut best = Match {
            entry: first,
            distance_squared: target.distance_squared(first_lab),
        };

        for (entry, lab) in it {
            let d = target.distance_squared(lab);
            if d < best.distance_squared {
                best = Match {
                    entry,
                    distance_squared: d,
                };
            }
        }

        best
    }
}

impl Rgba {
    /// Snap this color to the nearest builtin named color, keeping the
    /// original alpha.
    #[must_use]
    pub fn to_known(self) -> Rgba {
        Palette::known().nearest(self).entry.color.with_alpha(self.a)
    }
}

/// Convert an (r, g, b) triple to L\*a\*b\*.
///
/// Channel-level convenience mirroring [`Lab::from_rgba`].
#[must_use]
pub fn to_lab(r: u8, g: u8, b: u8) -> Lab {
    Lab::from_rgba(Rgba::rgb(r, g, b))
}

/// Find the builtin palette entry perceptually closest to (r, g, b).
#[must_use]
pub fn nearest_known_color(r: u8, g: u8, b: u8) -> &'static NamedColor {
    Palette::known().nearest(Rgba::rgb(r, g, b)).entry
}
