//! Letter favicon.
//!
//! The favicon is rendered from text alone; the source image is not used.
//! The file is named `<name>.ico` but holds PNG data, which browsers accept.
//! Writing a real ICO container would change the bytes existing deployments
//! serve, so the PNG payload is kept.

use std::path::PathBuf;

use image::RgbaImage;

use super::{ensure_dir, save_png};
use crate::asset::SizePx;
use crate::color::HexColor;
use crate::config::PwaConfig;
use crate::error::{Error, Result};
use crate::output::{AssetKind, OutputResolver};
use crate::render::{Typeface, solid_canvas};

/// Call-site overrides for favicon generation. Unset fields use [`PwaConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaviconOptions {
    /// Ignored when the output resolver publishes favicons to the public directory.
    pub output_dir: Option<PathBuf>,
    pub background: Option<HexColor>,
    pub text_color: Option<HexColor>,
    pub size: Option<u32>,
    /// File stem; `.ico` is always appended.
    pub file_name: Option<String>,
    pub font: Option<PathBuf>,
}

impl FaviconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn background(mut self, color: HexColor) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text_color(mut self, color: HexColor) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = Some(path.into());
        self
    }

    pub(crate) fn resolve(self, config: &PwaConfig, outputs: &dyn OutputResolver) -> Result<FaviconJob> {
        let size = self.size.unwrap_or(config.favicon_size);
        if size == 0 {
            return Err(Error::InvalidInput("favicon size must be at least 1 pixel".into()));
        }

        let file_name = self.file_name.unwrap_or_else(|| config.favicon_name.clone());
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(Error::InvalidInput(format!(
                "favicon name {file_name:?} must be a plain file stem"
            )));
        }

        Ok(FaviconJob {
            dir: outputs.output_dir(AssetKind::Favicon, self.output_dir.as_deref()),
            background: self.background.unwrap_or(config.background),
            text_color: self.text_color.unwrap_or(config.text_color),
            size,
            file_name,
            font: self.font.or_else(|| config.font.clone()),
        })
    }
}

/// Fully resolved favicon settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FaviconJob {
    pub dir: PathBuf,
    pub background: HexColor,
    pub text_color: HexColor,
    pub size: u32,
    pub file_name: String,
    pub font: Option<PathBuf>,
}

/// Renders `letters` on a `size` x `size` canvas.
///
/// The font size is half the canvas. Letters are centered horizontally by
/// their advance width; the baseline sits at `size / 2 + font_size / 2`, which
/// looks centered for capital Latin letters in typical fonts but is not a
/// general vertical-centering rule.
pub fn render_favicon(
    letters: &str,
    size: u32,
    background: HexColor,
    text_color: HexColor,
    face: &Typeface,
) -> RgbaImage {
    let mut canvas = solid_canvas(SizePx::square(size), background);

    let font_size = size as f32 / 2.0;
    let metrics = face.measure(letters, font_size);
    let x = (size as i64 - metrics.width as i64) / 2;
    let baseline = size as f32 / 2.0 + font_size / 2.0;
    face.draw(&mut canvas, letters, font_size, text_color, x as i32, baseline as i32);

    canvas
}

/// Writes the favicon and returns its path.
pub(crate) fn generate_favicon(letters: &str, job: &FaviconJob) -> Result<PathBuf> {
    let face = Typeface::open_or_bundled(job.font.as_deref())?;
    ensure_dir(&job.dir)?;

    let path = job.dir.join(format!("{}.ico", job.file_name));
    let canvas = render_favicon(letters, job.size, job.background, job.text_color, &face);
    save_png(&canvas, &path)?;

    tracing::info!(path = %path.display(), size = job.size, "generated favicon");
    Ok(path)
}
