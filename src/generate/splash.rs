//! Splash screens: a proportionally scaled icon with an optional caption.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::{ensure_dir, save_png};
use crate::asset::{AssetDescriptor, ScreenSize, SizePx};
use crate::color::HexColor;
use crate::config::PwaConfig;
use crate::error::{Error, Result};
use crate::naming::NameGenerator;
use crate::output::{AssetKind, OutputResolver};
use crate::render::{SourceImage, Typeface, composite_scaled, solid_canvas};

const FILE_PREFIX: &str = "splash_screen_";

/// Pixel size of splash screen captions.
pub const CAPTION_FONT_SIZE: f32 = 30.0;

/// Caption baseline distance from the bottom edge, as a percentage of height.
const CAPTION_BOTTOM_MARGIN_PCT: f64 = 6.0;

/// Call-site overrides for splash screen generation. Unset fields use [`PwaConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplashOptions {
    /// Text drawn near the bottom of every screen. No caption when `None`.
    pub caption: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub screens: Option<Vec<ScreenSize>>,
    pub background: Option<HexColor>,
    pub text_color: Option<HexColor>,
    pub icon_percentage: Option<u32>,
    pub font: Option<PathBuf>,
}

impl SplashOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption(mut self, text: impl Into<String>) -> Self {
        self.caption = Some(text.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn screens(mut self, screens: impl Into<Vec<ScreenSize>>) -> Self {
        self.screens = Some(screens.into());
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

    pub fn icon_percentage(mut self, percentage: u32) -> Self {
        self.icon_percentage = Some(percentage);
        self
    }

    pub fn font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = Some(path.into());
        self
    }

    pub(crate) fn resolve(self, config: &PwaConfig, outputs: &dyn OutputResolver) -> Result<SplashJob> {
        let screens = self.screens.unwrap_or_else(|| config.sizes.splash.clone());
        if let Some(bad) = screens.iter().find(|s| s.dimensions().is_empty()) {
            return Err(Error::InvalidInput(format!(
                "splash screen {}x{} has a zero dimension",
                bad.width, bad.height
            )));
        }

        Ok(SplashJob {
            dir: outputs.output_dir(AssetKind::SplashScreens, self.output_dir.as_deref()),
            screens,
            background: self.background.unwrap_or(config.background),
            text_color: self.text_color.unwrap_or(config.text_color),
            icon_percentage: self.icon_percentage.unwrap_or(config.icon_percentage),
            caption: self.caption,
            font: self.font.or_else(|| config.font.clone()),
        })
    }
}

/// Fully resolved splash screen settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SplashJob {
    pub dir: PathBuf,
    pub screens: Vec<ScreenSize>,
    pub background: HexColor,
    pub text_color: HexColor,
    pub icon_percentage: u32,
    pub caption: Option<String>,
    pub font: Option<PathBuf>,
}

/// Text drawn along the bottom of a splash screen.
#[derive(Debug, Clone, Copy)]
pub struct Caption<'a> {
    pub text: &'a str,
    pub face: &'a Typeface,
    pub color: HexColor,
}

/// Computes the icon size for a screen.
///
/// The width is `icon_percentage` percent of the screen width; the height
/// follows the source aspect ratio. Both are rounded to whole pixels.
pub fn splash_icon_size(screen: SizePx, source: SizePx, icon_percentage: u32) -> SizePx {
    let width = screen.width as f64 * icon_percentage as f64 / 100.0;
    let height = source.height as f64 * (width / source.width as f64);
    SizePx::new(width.round() as u32, height.round() as u32)
}

/// Renders one splash screen of `screen` size.
///
/// The icon is centered on both axes. A caption is centered horizontally with
/// its baseline 6% of the height above the bottom edge.
pub fn render_splash_screen(
    source: &SourceImage,
    screen: SizePx,
    background: HexColor,
    icon_percentage: u32,
    caption: Option<&Caption<'_>>,
) -> RgbaImage {
    let mut canvas = solid_canvas(screen, background);

    let icon = splash_icon_size(screen, source.dimensions(), icon_percentage);
    composite_scaled(&mut canvas, source, icon);

    if let Some(caption) = caption {
        let metrics = caption.face.measure(caption.text, CAPTION_FONT_SIZE);
        let x = (screen.width as i64 - metrics.width as i64) / 2;
        let height = screen.height as f64;
        let baseline = height - height * CAPTION_BOTTOM_MARGIN_PCT / 100.0;
        caption.face.draw(
            &mut canvas,
            caption.text,
            CAPTION_FONT_SIZE,
            caption.color,
            x as i32,
            baseline as i32,
        );
    }

    canvas
}

/// Writes one PNG per screen. Descriptors carry the original screen triple.
pub(crate) fn generate_splash_screens(
    source_path: &Path,
    job: &SplashJob,
    names: &dyn NameGenerator,
) -> Result<Vec<AssetDescriptor>> {
    let source = SourceImage::open(source_path)?;
    let face = match job.caption {
        Some(_) => Some(Typeface::open_or_bundled(job.font.as_deref())?),
        None => None,
    };
    let caption = job
        .caption
        .as_deref()
        .zip(face.as_ref())
        .map(|(text, face)| Caption {
            text,
            face,
            color: job.text_color,
        });

    ensure_dir(&job.dir)?;

    let mut screens = Vec::with_capacity(job.screens.len());
    for screen in &job.screens {
        let path = job.dir.join(format!("{}.png", names.unique_name(FILE_PREFIX)));
        let canvas = render_splash_screen(
            &source,
            screen.dimensions(),
            job.background,
            job.icon_percentage,
            caption.as_ref(),
        );
        save_png(&canvas, &path)?;
        screens.push(AssetDescriptor::new(path, screen.clone()));
    }

    tracing::info!(count = screens.len(), dir = %job.dir.display(), "generated splash screens");
    Ok(screens)
}
