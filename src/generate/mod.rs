//! Image generators: app icons, splash screens and the favicon.
//!
//! Each generator is split in two. A pure `render_*` function turns a
//! [`SourceImage`](crate::render::SourceImage) and resolved settings into a
//! canvas; a `generate_*` function resolves call-site options once, validates
//! every input, and only then creates directories and writes files.

pub mod favicon;
pub mod icon;
pub mod splash;

pub use favicon::{FaviconOptions, render_favicon};
pub use icon::{IconOptions, render_app_icon};
pub use splash::{Caption, SplashOptions, render_splash_screen, splash_icon_size};

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Creates `dir` and any missing parents.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Encodes `canvas` as PNG regardless of the extension of `path`.
pub(crate) fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), width = canvas.width(), height = canvas.height(), "wrote image");
    Ok(())
}
