//! Text measurement and baseline-anchored drawing.
//!
//! Sizes are pixel heights passed straight to [`PxScale`]. Positions follow
//! the usual typographic convention: `x` is the left edge of the first glyph's
//! advance box and `y` is the baseline.

use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::RgbaImage;
use imageproc::drawing::{draw_text_mut, text_size};

use crate::color::HexColor;
use crate::error::{Error, Result};

pub(crate) const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Measured extent of a string at a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Total horizontal advance in pixels.
    pub width: u32,
    /// Height of the tallest glyph's pixel bounds, not the font's line height.
    pub height: u32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
}

/// A loaded TrueType/OpenType font.
#[derive(Clone)]
pub struct Typeface {
    font: FontArc,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Typeface {
    /// Loads a font file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let font = FontArc::try_from_vec(bytes).map_err(|source| Error::Font {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { font })
    }

    /// The DejaVu Sans face shipped with the crate.
    pub fn bundled() -> Result<Self> {
        let font = FontArc::try_from_slice(BUNDLED_FONT).map_err(|source| Error::Font {
            path: "<bundled DejaVuSans.ttf>".into(),
            source,
        })?;
        Ok(Self { font })
    }

    /// Loads `path` when given, otherwise the bundled face.
    pub fn open_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Self::bundled(),
        }
    }

    /// Measures `text` rendered at `size` pixels.
    pub fn measure(&self, text: &str, size: f32) -> TextMetrics {
        let scale = PxScale::from(size);
        let (width, height) = text_size(scale, &self.font, text);
        TextMetrics {
            width,
            height,
            ascent: self.font.as_scaled(scale).ascent(),
        }
    }

    /// Draws `text` with its baseline at `baseline` and its left edge at `x`.
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        size: f32,
        color: HexColor,
        x: i32,
        baseline: i32,
    ) {
        let scale = PxScale::from(size);
        let top = baseline - self.font.as_scaled(scale).ascent().round() as i32;
        draw_text_mut(canvas, color.to_rgba(), x, top, scale, &self.font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::SizePx;
    use crate::render::solid_canvas;
    use tempfile::TempDir;

    #[test]
    fn bundled_font_loads() {
        assert!(Typeface::bundled().is_ok());
        assert!(Typeface::open_or_bundled(None).is_ok());
    }

    #[test]
    fn measure_grows_with_text_and_size() {
        let face = Typeface::bundled().unwrap();

        let short = face.measure("A", 30.0);
        let long = face.measure("AAAA", 30.0);
        let big = face.measure("A", 60.0);

        assert!(short.width > 0);
        assert!(long.width > short.width * 3);
        assert!(big.width > short.width);
        assert!(short.ascent > 0.0 && short.ascent < 30.0);
        assert_eq!(face.measure("", 30.0).width, 0);
    }

    #[test]
    fn draw_places_ink_above_baseline() {
        let face = Typeface::bundled().unwrap();
        let mut canvas = solid_canvas(SizePx::new(100, 60), HexColor::WHITE);

        face.draw(&mut canvas, "H", 30.0, HexColor::BLACK, 10, 40);

        let inked: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] < 128)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&(_, y)| y < 41), "H has no descender");
        assert!(inked.iter().all(|&(x, _)| x >= 10));
        assert!(inked.iter().any(|&(_, y)| y >= 36), "stems reach the baseline");
    }

    #[test]
    fn font_file_loads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("DejaVuSans.ttf");
        std::fs::write(&path, BUNDLED_FONT).unwrap();

        let face = Typeface::open(&path).unwrap();
        let from_path = Typeface::open_or_bundled(Some(&path)).unwrap();

        let bundled = Typeface::bundled().unwrap();
        assert_eq!(face.measure("Hello", 30.0), bundled.measure("Hello", 30.0));
        assert_eq!(from_path.measure("Hi", 12.0), bundled.measure("Hi", 12.0));
    }

    #[test]
    fn invalid_font_file_is_font_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        assert!(matches!(Typeface::open(&path), Err(Error::Font { .. })));
    }

    #[test]
    fn missing_font_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = Typeface::open(dir.path().join("missing.ttf"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
