//! # Colornear
//!
//! Perceptual nearest named-color matching over the classic web and
//! system palettes.
//!
//! Given any 24-bit RGB color, colornear answers "what is this color
//! called?" by converting it to CIE L\*a\*b\* and scanning a fixed,
//! ordered reference palette of 173 named colors (140 web colors in a
//! hand-curated color-wheel order, 33 system colors alphabetically) for
//! the perceptually closest entry.
//!
//! ## Quick Start
//!
//! ```rust
//! use colornear::prelude::*;
//!
//! // Channel-level entry points.
//! let entry = colornear::nearest_known_color(100, 149, 237);
//! assert_eq!(entry.name, "CornflowerBlue");
//!
//! let lab = colornear::to_lab(0, 0, 0);
//! assert!(lab.l.abs() < 1e-9);
//!
//! // Or through the color type; alpha is ignored for matching and
//! // reattached to the result.
//! let snapped = Rgba::new(254, 1, 2, 128).to_known();
//! assert_eq!(snapped, Rgba::new(255, 0, 0, 128));
//! ```
//!
//! ## Design
//!
//! - Matching distance is squared Euclidean distance in CIE L\*a\*b\*
//!   (D65 reference white), which tracks perceived color difference far
//!   better than RGB or HSL distance.
//! - The palette and its L\*a\*b\* table are immutable static data,
//!   built once behind a [`std::sync::OnceLock`]; lookups afterwards are
//!   read-only and safe to share across threads.
//! - Exact distance ties deterministically resolve to the entry that
//!   appears earlier in the palette's presentation order.
//! - The sRGB gamma expansion intentionally uses exponent 2.2 (not the
//!   canonical 2.4) for byte-level compatibility with the outputs of the
//!   implementation this crate replaces. See [`lab`] for details.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color math
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

/// Color types and color space conversions.
pub mod color;

/// CIE L\*a\*b\* conversion and distance.
pub mod lab;

/// The named reference palette (web + system groups).
pub mod palette;

/// Nearest-known-color search.
pub mod resolve;

/// Error types for colornear operations.
pub mod error;

pub use error::{Error, Result};
pub use resolve::{nearest_known_color, to_lab, Match};

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use colornear::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Hsla, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::lab::Lab;
    pub use crate::palette::{NamedColor, Palette, PaletteGroup};
    pub use crate::resolve::{nearest_known_color, to_lab, Match};
}
