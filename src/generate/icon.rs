//! Square application icons.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::{ensure_dir, save_png};
use crate::asset::{AssetDescriptor, SizePx};
use crate::color::HexColor;
use crate::config::PwaConfig;
use crate::error::{Error, Result};
use crate::naming::NameGenerator;
use crate::output::{AssetKind, OutputResolver};
use crate::render::{SourceImage, composite_scaled, solid_canvas};

const FILE_PREFIX: &str = "app_icon_";

/// Call-site overrides for icon generation. Unset fields use [`PwaConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconOptions {
    pub output_dir: Option<PathBuf>,
    pub sizes: Option<Vec<u32>>,
    pub background: Option<HexColor>,
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    pub fn background(mut self, color: HexColor) -> Self {
        self.background = Some(color);
        self
    }

    pub(crate) fn resolve(self, config: &PwaConfig, outputs: &dyn OutputResolver) -> Result<IconJob> {
        let sizes = self.sizes.unwrap_or_else(|| config.sizes.icons.clone());
        if sizes.contains(&0) {
            return Err(Error::InvalidInput("icon size must be at least 1 pixel".into()));
        }

        Ok(IconJob {
            dir: outputs.output_dir(AssetKind::Icons, self.output_dir.as_deref()),
            sizes,
            background: self.background.unwrap_or(config.background),
        })
    }
}

/// Fully resolved icon settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IconJob {
    pub dir: PathBuf,
    pub sizes: Vec<u32>,
    pub background: HexColor,
}

/// Renders one `size` x `size` icon.
///
/// The source is squashed to half the side length and centered, so it covers
/// the middle quarter of the canvas.
pub fn render_app_icon(source: &SourceImage, size: u32, background: HexColor) -> RgbaImage {
    let mut canvas = solid_canvas(SizePx::square(size), background);
    composite_scaled(&mut canvas, source, SizePx::square(size / 2));
    canvas
}

/// Writes one PNG per size and returns descriptors in the order of `job.sizes`.
pub(crate) fn generate_app_icons(
    source_path: &Path,
    job: &IconJob,
    names: &dyn NameGenerator,
) -> Result<Vec<AssetDescriptor>> {
    let source = SourceImage::open(source_path)?;
    ensure_dir(&job.dir)?;

    let mut icons = Vec::with_capacity(job.sizes.len());
    for &size in &job.sizes {
        let path = job.dir.join(format!("{}.png", names.unique_name(FILE_PREFIX)));
        let canvas = render_app_icon(&source, size, job.background);
        save_png(&canvas, &path)?;
        icons.push(AssetDescriptor::new(path, size));
    }

    tracing::info!(count = icons.len(), dir = %job.dir.display(), "generated app icons");
    Ok(icons)
}
