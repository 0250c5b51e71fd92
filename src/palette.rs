//! The named reference palette: web colors plus system colors.
//!
//! The palette is static ordered data. Web colors come first, in a
//! hand-curated traversal of the color wheel (reds, pinks, oranges,
//! yellows, purples, greens, blues, browns, whites, grays); system colors
//! follow, alphabetically, carrying the Windows default theme values.
//! The ordering is presentational and does not affect matching
//! correctness, but exact-tie resolution deterministically prefers the
//! earlier entry, so the order is part of the observable contract.

use std::sync::OnceLock;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::lab::Lab;

/// Which logical group of the reference palette an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteGroup {
    /// The 140 named web colors.
    Web,
    /// UI theme colors (window chrome, menus, highlights).
    System,
}

/// A reference palette entry: a human-readable name and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Human-readable name, unique within the palette.
    pub name: &'static str,
    /// The entry's color (always fully opaque).
    pub color: Rgba,
    /// Logical group the entry belongs to.
    pub group: PaletteGroup,
}

const fn web(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        color: Rgba::rgb(r, g, b),
        group: PaletteGroup::Web,
    }
}

const fn system(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        color: Rgba::rgb(r, g, b),
        group: PaletteGroup::System,
    }
}

/// Web colors in presentation order: a hand-curated walk around the color
/// wheel, not alphabetical. `Transparent` is deliberately absent: matching
/// ignores alpha, so it would be indistinguishable from `White`.
pub static WEB_COLORS: &[NamedColor] = &[
    // Reds
    web("IndianRed", 0xCD, 0x5C, 0x5C),
    web("LightCoral", 0xF0, 0x80, 0x80),
    web("Salmon", 0xFA, 0x80, 0x72),
    web("DarkSalmon", 0xE9, 0x96, 0x7A),
    web("LightSalmon", 0xFF, 0xA0, 0x7A),
    web("Crimson", 0xDC, 0x14, 0x3C),
    web("Red", 0xFF, 0x00, 0x00),
    web("FireBrick", 0xB2, 0x22, 0x22),
    web("DarkRed", 0x8B, 0x00, 0x00),
    // Pinks
    web("Pink", 0xFF, 0xC0, 0xCB),
    web("LightPink", 0xFF, 0xB6, 0xC1),
    web("HotPink", 0xFF, 0x69, 0xB4),
    web("DeepPink", 0xFF, 0x14, 0x93),
    web("MediumVioletRed", 0xC7, 0x15, 0x85),
    web("PaleVioletRed", 0xDB, 0x70, 0x93),
    // Oranges
    web("Coral", 0xFF, 0x7F, 0x50),
    web("Tomato", 0xFF, 0x63, 0x47),
    web("OrangeRed", 0xFF, 0x45, 0x00),
    web("DarkOrange", 0xFF, 0x8C, 0x00),
    web("Orange", 0xFF, 0xA5, 0x00),
    // Yellows
    web("Gold", 0xFF, 0xD7, 0x00),
    web("Yellow", 0xFF, 0xFF, 0x00),
    web("LightYellow", 0xFF, 0xFF, 0xE0),
    web("LemonChiffon", 0xFF, 0xFA, 0xCD),
    web("LightGoldenrodYellow", 0xFA, 0xFA, 0xD2),
    web("PapayaWhip", 0xFF, 0xEF, 0xD5),
    web("Moccasin", 0xFF, 0xE4, 0xB5),
    web("PeachPuff", 0xFF, 0xDA, 0xB9),
    web("PaleGoldenrod", 0xEE, 0xE8, 0xAA),
    web("Khaki", 0xF0, 0xE6, 0x8C),
    web("DarkKhaki", 0xBD, 0xB7, 0x6B),
    // Purples
    web("Lavender", 0xE6, 0xE6, 0xFA),
    web("Thistle", 0xD8, 0xBF, 0xD8),
    web("Plum", 0xDD, 0xA0, 0xDD),
    web("Violet", 0xEE, 0x82, 0xEE),
    web("Orchid", 0xDA, 0x70, 0xD6),
    web("Fuchsia", 0xFF, 0x00, 0xFF),
    web("Magenta", 0xFF, 0x00, 0xFF),
    web("MediumOrchid", 0xBA, 0x55, 0xD3),
    web("MediumPurple", 0x93, 0x70, 0xDB),
    web("BlueViolet", 0x8A, 0x2B, 0xE2),
    web("DarkViolet", 0x94, 0x00, 0xD3),
    web("DarkOrchid", 0x99, 0x32, 0xCC),
    web("DarkMagenta", 0x8B, 0x00, 0x8B),
    web("Purple", 0x80, 0x00, 0x80),
    web("Indigo", 0x4B, 0x00, 0x82),
    web("SlateBlue", 0x6A, 0x5A, 0xCD),
    web("DarkSlateBlue", 0x48, 0x3D, 0x8B),
    web("MediumSlateBlue", 0x7B, 0x68, 0xEE),
    // Greens
    web("GreenYellow", 0xAD, 0xFF, 0x2F),
    web("Chartreuse", 0x7F, 0xFF, 0x00),
    web("LawnGreen", 0x7C, 0xFC, 0x00),
    web("Lime", 0x00, 0xFF, 0x00),
    web("LimeGreen", 0x32, 0xCD, 0x32),
    web("PaleGreen", 0x98, 0xFB, 0x98),
    web("LightGreen", 0x90, 0xEE, 0x90),
    web("MediumSpringGreen", 0x00, 0xFA, 0x9A),
    web("SpringGreen", 0x00, 0xFF, 0x7F),
    web("MediumSeaGreen", 0x3C, 0xB3, 0x71),
    web("SeaGreen", 0x2E, 0x8B, 0x57),
    web("ForestGreen", 0x22, 0x8B, 0x22),
    web("Green", 0x00, 0x80, 0x00),
    web("DarkGreen", 0x00, 0x64, 0x00),
    web("YellowGreen", 0x9A, 0xCD, 0x32),
    web("OliveDrab", 0x6B, 0x8E, 0x23),
    web("Olive", 0x80, 0x80, 0x00),
    web("DarkOliveGreen", 0x55, 0x6B, 0x2F),
    web("MediumAquamarine", 0x66, 0xCD, 0xAA),
    web("DarkSeaGreen", 0x8F, 0xBC, 0x8B),
    web("LightSeaGreen", 0x20, 0xB2, 0xAA),
    web("DarkCyan", 0x00, 0x8B, 0x8B),
    web("Teal", 0x00, 0x80, 0x80),
    // Blues and cyans
    web("Aqua", 0x00, 0xFF, 0xFF),
    web("Cyan", 0x00, 0xFF, 0xFF),
    web("LightCyan", 0xE0, 0xFF, 0xFF),
    web("PaleTurquoise", 0xAF, 0xEE, 0xEE),
    web("Aquamarine", 0x7F, 0xFF, 0xD4),
    web("Turquoise", 0x40, 0xE0, 0xD0),
    web("MediumTurquoise", 0x48, 0xD1, 0xCC),
    web("DarkTurquoise", 0x00, 0xCE, 0xD1),
    web("CadetBlue", 0x5F, 0x9E, 0xA0),
    web("SteelBlue", 0x46, 0x82, 0xB4),
    web("LightSteelBlue", 0xB0, 0xC4, 0xDE),
    web("PowderBlue", 0xB0, 0xE0, 0xE6),
    web("LightBlue", 0xAD, 0xD8, 0xE6),
    web("SkyBlue", 0x87, 0xCE, 0xEB),
    web("LightSkyBlue", 0x87, 0xCE, 0xFA),
    web("DeepSkyBlue", 0x00, 0xBF, 0xFF),
    web("DodgerBlue", 0x1E, 0x90, 0xFF),
    web("CornflowerBlue", 0x64, 0x95, 0xED),
    web("RoyalBlue", 0x41, 0x69, 0xE1),
    web("Blue", 0x00, 0x00, 0xFF),
    web("MediumBlue", 0x00, 0x00, 0xCD),
    web("DarkBlue", 0x00, 0x00, 0x8B),
    web("Navy", 0x00, 0x00, 0x80),
    web("MidnightBlue", 0x19, 0x19, 0x70),
    // Browns
    web("Cornsilk", 0xFF, 0xF8, 0xDC),
    web("BlanchedAlmond", 0xFF, 0xEB, 0xCD),
    web("Bisque", 0xFF, 0xE4, 0xC4),
    web("NavajoWhite", 0xFF, 0xDE, 0xAD),
    web("Wheat", 0xF5, 0xDE, 0xB3),
    web("BurlyWood", 0xDE, 0xB8, 0x87),
    web("Tan", 0xD2, 0xB4, 0x8C),
    web("RosyBrown", 0xBC, 0x8F, 0x8F),
    web("SandyBrown", 0xF4, 0xA4, 0x60),
    web("Goldenrod", 0xDA, 0xA5, 0x20),
    web("DarkGoldenrod", 0xB8, 0x86, 0x0B),
    web("Peru", 0xCD, 0x85, 0x3F),
    web("Chocolate", 0xD2, 0x69, 0x1E),
    web("SaddleBrown", 0x8B, 0x45, 0x13),
    web("Sienna", 0xA0, 0x52, 0x2D),
    web("Brown", 0xA5, 0x2A, 0x2A),
    web("Maroon", 0x80, 0x00, 0x00),
    // Whites
    web("White", 0xFF, 0xFF, 0xFF),
    web("Snow", 0xFF, 0xFA, 0xFA),
    web("Honeydew", 0xF0, 0xFF, 0xF0),
    web("MintCream", 0xF5, 0xFF, 0xFA),
    web("Azure", 0xF0, 0xFF, 0xFF),
    web("AliceBlue", 0xF0, 0xF8, 0xFF),
    web("GhostWhite", 0xF8, 0xF8, 0xFF),
    web("WhiteSmoke", 0xF5, 0xF5, 0xF5),
    web("Seashell", 0xFF, 0xF5, 0xEE),
    web("Beige", 0xF5, 0xF5, 0xDC),
    web("OldLace", 0xFD, 0xF5, 0xE6),
    web("FloralWhite", 0xFF, 0xFA, 0xF0),
    web("Ivory", 0xFF, 0xFF, 0xF0),
    web("AntiqueWhite", 0xFA, 0xEB, 0xD7),
    web("Linen", 0xFA, 0xF0, 0xE6),
    web("LavenderBlush", 0xFF, 0xF0, 0xF5),
    web("MistyRose", 0xFF, 0xE4, 0xE1),
    // Grays
    web("Gainsboro", 0xDC, 0xDC, 0xDC),
    web("LightGray", 0xD3, 0xD3, 0xD3),
    web("Silver", 0xC0, 0xC0, 0xC0),
    web("DarkGray", 0xA9, 0xA9, 0xA9),
    web("Gray", 0x80, 0x80, 0x80),
    web("DimGray", 0x69, 0x69, 0x69),
    web("LightSlateGray", 0x77, 0x88, 0x99),
    web("SlateGray", 0x70, 0x80, 0x90),
    web("DarkSlateGray", 0x2F, 0x4F, 0x4F),
    web("Black", 0x00, 0x00, 0x00),
];

/// System colors in alphabetical order, with the Windows default theme
/// values baked in as static data.
pub static SYSTEM_COLORS: &[NamedColor] = &[
    system("ActiveBorder", 0xB4, 0xB4, 0xB4),
    system("ActiveCaption", 0x99, 0xB4, 0xD1),
    system("ActiveCaptionText", 0x00, 0x00, 0x00),
    system("AppWorkspace", 0xAB, 0xAB, 0xAB),
    system("ButtonFace", 0xF0, 0xF0, 0xF0),
    system("ButtonHighlight", 0xFF, 0xFF, 0xFF),
    system("ButtonShadow", 0xA0, 0xA0, 0xA0),
    system("Control", 0xF0, 0xF0, 0xF0),
    system("ControlDark", 0xA0, 0xA0, 0xA0),
    system("ControlDarkDark", 0x69, 0x69, 0x69),
    system("ControlLight", 0xE3, 0xE3, 0xE3),
    system("ControlLightLight", 0xFF, 0xFF, 0xFF),
    system("ControlText", 0x00, 0x00, 0x00),
    system("Desktop", 0x00, 0x00, 0x00),
    system("GradientActiveCaption", 0xB9, 0xD1, 0xEA),
    system("GradientInactiveCaption", 0xD7, 0xE4, 0xF2),
    system("GrayText", 0x6D, 0x6D, 0x6D),
    system("Highlight", 0x00, 0x78, 0xD7),
    system("HighlightText", 0xFF, 0xFF, 0xFF),
    system("HotTrack", 0x00, 0x66, 0xCC),
    system("InactiveBorder", 0xF4, 0xF7, 0xFC),
    system("InactiveCaption", 0xBF, 0xCD, 0xDB),
    system("InactiveCaptionText", 0x00, 0x00, 0x00),
    system("Info", 0xFF, 0xFF, 0xE1),
    system("InfoText", 0x00, 0x00, 0x00),
    system("Menu", 0xF0, 0xF0, 0xF0),
    system("MenuBar", 0xF0, 0xF0, 0xF0),
    system("MenuHighlight", 0x33, 0x99, 0xFF),
    system("MenuText", 0x00, 0x00, 0x00),
    system("ScrollBar", 0xC8, 0xC8, 0xC8),
    system("Window", 0xFF, 0xFF, 0xFF),
    system("WindowFrame", 0x64, 0x64, 0x64),
    system("WindowText", 0x00, 0x00, 0x00),
];

/// An immutable palette paired with precomputed L\*a\*b\* values.
///
/// Built once, read-only afterwards. [`Palette::known`] is the
/// process-wide builtin table (web colors followed by system colors);
/// custom palettes can be built with [`Palette::new`] for matching
/// against other reference sets.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<NamedColor>,
    lab: Vec<Lab>,
}

impl Palette {
    /// Build a palette from entries, precomputing their L\*a\*b\* values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] when `entries` is empty; matching
    /// against an empty palette has no meaningful answer, so the
    /// precondition is enforced at construction.
    pub fn new(entries: Vec<NamedColor>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyPalette);
        }

        let lab = entries.iter().map(|e| Lab::from_rgba(e.color)).collect();
        Ok(Self { entries, lab })
    }

    /// The builtin reference palette, built on first use and shared for
    /// the lifetime of the process.
    #[must_use]
    pub fn known() -> &'static Self {
        static KNOWN: OnceLock<Palette> = OnceLock::new();
        KNOWN.get_or_init(|| {
            let entries = WEB_COLORS.iter().chain(SYSTEM_COLORS).copied().collect();
            Self::new(entries).expect("builtin palette is non-empty")
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries. Always false for constructed
    /// palettes, provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in presentation order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NamedColor> {
        self.entries.get(index)
    }

    /// Precomputed L\*a\*b\* value for the entry at `index`.
    #[must_use]
    pub fn lab(&self, index: usize) -> Option<Lab> {
        self.lab.get(index).copied()
    }

    /// Iterate entries in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }

    /// Iterate (entry, L\*a\*b\*) pairs in presentation order.
    pub(crate) fn iter_lab(&self) -> impl Iterator<Item = (&NamedColor, Lab)> {
        self.entries.iter().zip(self.lab.iter().copied())
    }

    /// Look up an entry by name (case-sensitive).
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&NamedColor> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a NamedColor;
    type IntoIter = std::slice::Iter<'a, NamedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_sizes() {
        assert_eq!(WEB_COLORS.len(), 140);
        assert_eq!(SYSTEM_COLORS.len(), 33);
        assert_eq!(Palette::known().len(), 173);
    }

    #[test]
    fn test_names_are_unique() {
        let palette = Palette::known();
        let mut names: Vec<&str> = palette.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), palette.len());
    }

    #[test]
    fn test_web_precedes_system() {
        let palette = Palette::known();
        let first_system = palette
            .iter()
            .position(|e| e.group == PaletteGroup::System)
            .unwrap();
        assert_eq!(first_system, WEB_COLORS.len());
        assert!(palette
            .iter()
            .take(first_system)
            .all(|e| e.group == PaletteGroup::Web));
        assert!(palette
            .iter()
            .skip(first_system)
            .all(|e| e.group == PaletteGroup::System));
    }

    #[test]
    fn test_system_colors_alphabetical() {
        let names: Vec<&str> = SYSTEM_COLORS.iter().map(|e| e.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_entries_are_opaque() {
        assert!(Palette::known().iter().all(|e| e.color.a == 255));
    }

    #[test]
    fn test_by_name() {
        let palette = Palette::known();
        let red = palette.by_name("Red").unwrap();
        assert_eq!(red.color, Rgba::rgb(255, 0, 0));
        assert_eq!(red.group, PaletteGroup::Web);

        let window = palette.by_name("Window").unwrap();
        assert_eq!(window.color, Rgba::rgb(255, 255, 255));
        assert_eq!(window.group, PaletteGroup::System);

        assert!(palette.by_name("NotAColor").is_none());
        // Case sensitive, matching the published names.
        assert!(palette.by_name("red").is_none());
    }

    #[test]
    fn test_lab_cache_matches_entries() {
        let palette = Palette::known();
        for (i, entry) in palette.iter().enumerate() {
            let cached = palette.lab(i).unwrap();
            assert_eq!(cached, Lab::from_rgba(entry.color));
        }
    }

    #[test]
    fn test_known_is_shared() {
        let a: *const Palette = Palette::known();
        let b: *const Palette = Palette::known();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(
            Palette::new(Vec::new()),
            Err(Error::EmptyPalette)
        ));
    }

    #[test]
    fn test_spot_check_hex_values() {
        let palette = Palette::known();
        for (name, hex) in [
            ("CornflowerBlue", "#6495ED"),
            ("Indigo", "#4B0082"),
            ("DarkSeaGreen", "#8FBC8B"),
            ("Highlight", "#0078D7"),
            ("Info", "#FFFFE1"),
        ] {
            let entry = palette.by_name(name).unwrap();
            assert_eq!(entry.color.to_string(), hex, "wrong value for {name}");
        }
    }
}
