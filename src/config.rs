//! Generator configuration.
//!
//! [`PwaConfig`] holds every default a generation call falls back to. It is
//! plain data: build it in code, or load it from JSON where every field is
//! optional.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "sizes": { "icons": [192, 512], "splash": [[750, 1334, "portrait"]] },
//!   "output": { "publicDir": "public", "publishFaviconToPublic": false },
//!   "background": "#ffffff",
//!   "textColor": "#658479",
//!   "manifest": { "name": "Weather", "display": "standalone" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::ScreenSize;
use crate::color::HexColor;
use crate::error::{Error, Result};
use crate::manifest::DisplayMode;

const STORAGE_ROOT: &str = "storage/app/public/pwa-assets";

// ============================================================================
// Sizes
// ============================================================================

/// Default icon and splash screen sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct SizeConfig {
    /// Square icon side lengths, in pixels.
    pub icons: Vec<u32>,
    /// Splash screen `[width, height, orientation]` triples.
    pub splash: Vec<ScreenSize>,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            icons: vec![192, 512, 48, 72, 96, 144, 168, 180, 256],
            splash: vec![
                ScreenSize::portrait(640, 1136),
                ScreenSize::portrait(750, 1334),
                ScreenSize::portrait(1242, 2208),
                ScreenSize::portrait(1125, 2436),
                ScreenSize::portrait(1242, 2688),
                ScreenSize::portrait(1536, 2048),
                ScreenSize::portrait(2048, 2732),
            ],
        }
    }
}

// ============================================================================
// Output locations
// ============================================================================

/// Where generated files land.
///
/// This is also the default [`OutputResolver`](crate::OutputResolver): the two
/// `publish_*` flags send the favicon and manifest to `public_dir` instead of
/// their dedicated folders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub public_dir: PathBuf,
    pub icons: PathBuf,
    pub splash: PathBuf,
    pub favicon: PathBuf,
    pub manifest: PathBuf,
    /// File the splash screen `<link>` fragment is written to.
    pub splash_links: PathBuf,
    pub publish_manifest_to_public: bool,
    pub publish_favicon_to_public: bool,
}

impl OutputConfig {
    /// Places every output under `root`, with publishing to `root/public` enabled.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        Self {
            public_dir: root.join(defaults.public_dir),
            icons: root.join(defaults.icons),
            splash: root.join(defaults.splash),
            favicon: root.join(defaults.favicon),
            manifest: root.join(defaults.manifest),
            splash_links: root.join(defaults.splash_links),
            ..defaults
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        let storage = Path::new(STORAGE_ROOT);
        Self {
            public_dir: PathBuf::from("public"),
            icons: storage.join("app-icons"),
            splash: storage.join("splash-screens"),
            favicon: storage.to_path_buf(),
            manifest: storage.to_path_buf(),
            splash_links: storage.join("splash-screen-links.html"),
            publish_manifest_to_public: true,
            publish_favicon_to_public: true,
        }
    }
}

// ============================================================================
// Manifest defaults
// ============================================================================

/// Fallback values for manifest fields the caller does not override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestDefaults {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    pub lang: String,
    pub description: String,
    pub display: DisplayMode,
    pub background_color: HexColor,
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self {
            name: "App".to_string(),
            short_name: "App".to_string(),
            start_url: "/".to_string(),
            lang: "en".to_string(),
            description: "Description of app".to_string(),
            display: DisplayMode::Standalone,
            background_color: HexColor::WHITE,
        }
    }
}

// ============================================================================
// PwaConfig
// ============================================================================

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct PwaConfig {
    pub sizes: SizeConfig,
    pub output: OutputConfig,

    /// Font used for captions and favicons. `None` uses the bundled face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,

    pub background: HexColor,
    pub text_color: HexColor,

    /// Splash icon width as a percentage of the screen width.
    pub icon_percentage: u32,
    pub favicon_size: u32,
    /// Favicon file stem; the file is always written as `<name>.ico`.
    pub favicon_name: String,

    /// Prefix joined onto asset paths in splash `<link>` hrefs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_base_url: Option<String>,

    pub manifest: ManifestDefaults,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            sizes: SizeConfig::default(),
            output: OutputConfig::default(),
            font: None,
            background: HexColor::WHITE,
            text_color: HexColor::from_rgb(0x65, 0x84, 0x79),
            icon_percentage: 10,
            favicon_size: 64,
            favicon_name: "favicon".to_string(),
            asset_base_url: None,
            manifest: ManifestDefaults::default(),
        }
    }
}

impl PwaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the output locations.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Sets the caption/favicon font.
    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
