//! Error types for colornear operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colornear operations.
///
/// The resolver itself is total and never fails; errors only arise at
/// the edges (parsing user input, constructing custom palettes).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Color parsing error (malformed hex string).
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A palette was constructed with no entries. Matching against an
    /// empty palette has no answer, so this is rejected at build time.
    #[error("Palette must contain at least one entry")]
    EmptyPalette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = Error::InvalidColor("#ZZZZZZ".to_string());
        assert!(err.to_string().contains("#ZZZZZZ"));
    }

    #[test]
    fn test_empty_palette_display() {
        assert!(Error::EmptyPalette.to_string().contains("at least one"));
    }
}
