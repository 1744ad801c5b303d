//! Error type shared by every generator and writer.

use std::path::PathBuf;

/// Errors produced while generating PWA assets.
///
/// Input problems (`InvalidColor`, `InvalidInput`, `Image`, `Svg`, `Font`) are
/// raised before anything is written for the failing call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string that is not exactly `#RRGGBB`.
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    /// Caller-supplied data that cannot be rendered or serialized.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The source image could not be opened or decoded.
    #[error("failed to load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The source SVG could not be parsed.
    #[error("failed to parse SVG {}: {source}", path.display())]
    Svg {
        path: PathBuf,
        #[source]
        source: resvg::usvg::Error,
    },

    /// The font file is not a usable TrueType/OpenType font.
    #[error("failed to load font {}: {source}", path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },

    /// A filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered image could not be encoded or written.
    #[error("failed to write image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
