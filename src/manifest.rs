//! `manifest.webmanifest` generation.
//!
//! # JSON Format
//!
//! ```json
//! {
//!     "name": "Weather",
//!     "short_name": "Weather",
//!     "start_url": "/",
//!     "lang": "en",
//!     "description": "Forecasts",
//!     "display": "standalone",
//!     "background_color": "#ffffff",
//!     "icons": [
//!         { "src": "icons/app_icon_1.png", "sizes": 192, "type": "image/png" }
//!     ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::{AssetDescriptor, AssetSize, url_path};
use crate::color::HexColor;
use crate::config::ManifestDefaults;
use crate::error::{Error, Result};
use crate::generate::ensure_dir;

/// File name the manifest is always written under.
pub const MANIFEST_FILE_NAME: &str = "manifest.webmanifest";

const ICON_MIME_TYPE: &str = "image/png";

/// How the installed app is presented by the host OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Standalone,
    MinimalUi,
    Browser,
}

/// Manifest fields supplied by the caller.
///
/// Every descriptive field is optional and falls back to
/// [`ManifestDefaults`] when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ManifestData {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub start_url: Option<String>,
    pub lang: Option<String>,
    pub description: Option<String>,
    pub display: Option<DisplayMode>,
    pub background_color: Option<HexColor>,
    pub icons: Vec<AssetDescriptor>,
}

impl ManifestData {
    pub fn with_icons(icons: Vec<AssetDescriptor>) -> Self {
        Self {
            icons,
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn start_url(mut self, start_url: impl Into<String>) -> Self {
        self.start_url = Some(start_url.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = Some(display);
        self
    }

    pub fn background_color(mut self, color: HexColor) -> Self {
        self.background_color = Some(color);
        self
    }
}

/// One entry of the manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: AssetSize,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<&AssetDescriptor> for ManifestIcon {
    fn from(descriptor: &AssetDescriptor) -> Self {
        Self {
            src: url_path(&descriptor.path),
            sizes: descriptor.size.clone(),
            mime_type: ICON_MIME_TYPE.to_string(),
        }
    }
}

/// A complete web app manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub lang: String,
    pub description: String,
    pub display: DisplayMode,
    pub background_color: HexColor,
    pub icons: Vec<ManifestIcon>,
}

impl Manifest {
    /// Fills every field from `data`, falling back to `defaults`.
    pub fn build(data: ManifestData, defaults: &ManifestDefaults) -> Self {
        Self {
            name: data.name.unwrap_or_else(|| defaults.name.clone()),
            short_name: data.short_name.unwrap_or_else(|| defaults.short_name.clone()),
            start_url: data.start_url.unwrap_or_else(|| defaults.start_url.clone()),
            lang: data.lang.unwrap_or_else(|| defaults.lang.clone()),
            description: data.description.unwrap_or_else(|| defaults.description.clone()),
            display: data.display.unwrap_or(defaults.display),
            background_color: data.background_color.unwrap_or(defaults.background_color),
            icons: data.icons.iter().map(ManifestIcon::from).collect(),
        }
    }

    /// Pretty-prints with four-space indentation. Slashes are never escaped.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::InvalidInput(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes `dir/manifest.webmanifest`, replacing any existing file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let json = self.to_json_pretty()?;
        ensure_dir(dir)?;

        let path = dir.join(MANIFEST_FILE_NAME);
        std::fs::write(&path, json).map_err(|e| Error::io(&path, e))?;

        tracing::info!(path = %path.display(), icons = self.icons.len(), "wrote manifest");
        Ok(path)
    }
}
