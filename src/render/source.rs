//! Loading the source image that icons and splash screens are built from.
//!
//! Raster formats are decoded with `image`, picking the decoder from the file
//! contents rather than its name. Files with an `.svg` extension are
//! rasterized with resvg at their intrinsic size.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageReader, ImageResult, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::asset::{RectPx, SizePx};
use crate::error::{Error, Result};

/// A decoded source image. Never modified after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    data: RgbaImage,
}

impl SourceImage {
    /// Opens and decodes the image at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        let data = if is_svg {
            let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
            rasterize_svg(&bytes).map_err(|source| match source {
                SvgError::Parse(source) => Error::Svg {
                    path: path.to_path_buf(),
                    source,
                },
                SvgError::Empty => Error::InvalidInput(format!(
                    "SVG {} has an empty canvas",
                    path.display()
                )),
            })?
        } else {
            decode_raster(path).map_err(|source| Error::Image {
                path: path.to_path_buf(),
                source,
            })?
        };

        if data.width() == 0 || data.height() == 0 {
            return Err(Error::InvalidInput(format!(
                "source image {} has no pixels",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), width = data.width(), height = data.height(), "loaded source image");
        Ok(Self { data })
    }

    /// Wraps an already decoded image.
    pub fn from_rgba(data: RgbaImage) -> Self {
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.data
    }

    /// Returns a copy resampled to exactly `target`, ignoring aspect ratio.
    pub fn scaled(&self, target: SizePx) -> RgbaImage {
        if target == self.dimensions() {
            return self.data.clone();
        }
        imageops::resize(&self.data, target.width, target.height, FilterType::Triangle)
    }

    /// Resamples only `region` of the image as it would appear scaled to `target`.
    ///
    /// `region` is in target coordinates and must lie inside `target`. The
    /// cost follows the region size, so a target far larger than any canvas
    /// stays cheap as long as only its visible part is requested.
    pub fn scaled_region(&self, target: SizePx, region: RectPx) -> RgbaImage {
        if self.dimensions().is_empty() {
            return RgbaImage::new(region.width, region.height);
        }
        if region == RectPx::new(0, 0, target.width, target.height) {
            return self.scaled(target);
        }

        let (x0, x1) = source_span(region.x, region.width, target.width, self.width());
        let (y0, y1) = source_span(region.y, region.height, target.height, self.height());
        let crop = imageops::crop_imm(&self.data, x0, y0, x1 - x0, y1 - y0).to_image();
        imageops::resize(&crop, region.width, region.height, FilterType::Triangle)
    }
}

/// Maps `[offset, offset + len)` on a `target` long axis back onto a `source`
/// long axis, widened to whole source pixels. `source` must be non-zero.
fn source_span(offset: i32, len: u32, target: u32, source: u32) -> (u32, u32) {
    let ratio = source as f64 / target as f64;
    let start = ((offset as f64 * ratio).floor() as u32).min(source - 1);
    let end = (((offset as f64 + len as f64) * ratio).ceil() as u32).clamp(start + 1, source);
    (start, end)
}

fn decode_raster(path: &Path) -> ImageResult<RgbaImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?.to_rgba8())
}

enum SvgError {
    Parse(resvg::usvg::Error),
    Empty,
}

fn rasterize_svg(bytes: &[u8]) -> std::result::Result<RgbaImage, SvgError> {
    let tree = Tree::from_data(bytes, &Options::default()).map_err(SvgError::Parse)?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(SvgError::Empty)?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        // tiny_skia stores premultiplied alpha
        match pixmap.pixel(x, y) {
            Some(pixel) => {
                let c = pixel.demultiply();
                image::Rgba([c.red(), c.green(), c.blue(), c.alpha()])
            }
            None => image::Rgba([0, 0, 0, 0]),
        }
    })
}
