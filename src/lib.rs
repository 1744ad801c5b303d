//! pwa-assets: static Progressive Web App asset generation
//!
//! This crate turns one source image and a few style settings into the files
//! a PWA needs: square app icons, splash screens with an optional caption, a
//! letter favicon, `manifest.webmanifest`, and Apple splash screen `<link>`
//! markup.
//!
//! # Example
//!
//! ```no_run
//! use pwa_assets::{AssetGenerator, ManifestData, PwaConfig};
//!
//! let generator = AssetGenerator::new(PwaConfig::default());
//!
//! // Icons, splash screens, favicon, manifest and links in one go
//! let favicon = generator.generate_assets(
//!     "logo.png",
//!     "WX",
//!     Some("Weather"),
//!     Some(ManifestData::default().name("Weather")),
//! )?;
//! # Ok::<(), pwa_assets::Error>(())
//! ```
//!
//! # Rendering Without Files
//!
//! The `render_*` functions only produce canvases, which is handy for
//! previews:
//!
//! ```
//! use image::RgbaImage;
//! use pwa_assets::{render_app_icon, HexColor, SourceImage};
//!
//! let source = SourceImage::from_rgba(RgbaImage::new(64, 64));
//! let icon = render_app_icon(&source, 192, HexColor::parse("#ffffff").unwrap());
//! assert_eq!(icon.dimensions(), (192, 192));
//! ```

mod asset;
mod color;
mod config;
mod error;
mod generate;
mod generator;
mod links;
mod manifest;
mod naming;
mod output;
mod render;

pub use asset::{AssetDescriptor, AssetSize, RectPx, ScreenSize, SizePx};
pub use color::HexColor;
pub use config::{ManifestDefaults, OutputConfig, PwaConfig, SizeConfig};
pub use error::{Error, Result};
pub use generate::splash::CAPTION_FONT_SIZE;
pub use generate::{
    Caption, FaviconOptions, IconOptions, SplashOptions, render_app_icon, render_favicon,
    render_splash_screen, splash_icon_size,
};
pub use generator::AssetGenerator;
pub use links::{SplashLinkEntry, read_splash_links, render_splash_links, write_splash_links};
pub use manifest::{DisplayMode, MANIFEST_FILE_NAME, Manifest, ManifestData, ManifestIcon};
pub use naming::{NameGenerator, SequentialNames, UuidNames};
pub use output::{AssetKind, OutputResolver};
pub use render::{SourceImage, TextMetrics, Typeface, composite_scaled, solid_canvas};
