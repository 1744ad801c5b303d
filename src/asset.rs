//! Pixel geometry, size specifications and generated asset descriptors.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A rectangle defined in pixel coordinates.
///
/// The origin may be negative when an image is placed partly outside its
/// canvas; the overflow is clipped when compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the rectangle of this size centered inside `outer`.
    pub fn centered_in(&self, outer: SizePx) -> RectPx {
        let x = (outer.width as i64 - self.width as i64) / 2;
        let y = (outer.height as i64 - self.height as i64) / 2;
        RectPx::new(x as i32, y as i32, self.width, self.height)
    }
}

/// A target screen for a splash image.
///
/// Serialized as the triple `[width, height, "orientation"]`. The orientation
/// label is never interpreted, only carried through to link markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(from = "(u32, u32, String)", into = "(u32, u32, String)")]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
    pub orientation: String,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32, orientation: impl Into<String>) -> Self {
        Self {
            width,
            height,
            orientation: orientation.into(),
        }
    }

    pub fn portrait(width: u32, height: u32) -> Self {
        Self::new(width, height, "portrait")
    }

    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }
}

impl From<(u32, u32, String)> for ScreenSize {
    fn from((width, height, orientation): (u32, u32, String)) -> Self {
        Self {
            width,
            height,
            orientation,
        }
    }
}

impl From<ScreenSize> for (u32, u32, String) {
    fn from(size: ScreenSize) -> Self {
        (size.width, size.height, size.orientation)
    }
}

/// The size recorded for a generated asset.
///
/// Icons carry their side length, splash screens their full screen triple.
///
/// ```json
/// 192
/// [750, 1334, "portrait"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum AssetSize {
    Square(u32),
    Screen(ScreenSize),
}

impl AssetSize {
    pub fn as_screen(&self) -> Option<&ScreenSize> {
        match self {
            Self::Screen(screen) => Some(screen),
            Self::Square(_) => None,
        }
    }
}

impl From<u32> for AssetSize {
    fn from(side: u32) -> Self {
        Self::Square(side)
    }
}

impl From<ScreenSize> for AssetSize {
    fn from(screen: ScreenSize) -> Self {
        Self::Screen(screen)
    }
}

impl fmt::Display for AssetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square(side) => write!(f, "{side}x{side}"),
            Self::Screen(s) => write!(f, "{}x{} {}", s.width, s.height, s.orientation),
        }
    }
}

/// A generated file and the size it was rendered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct AssetDescriptor {
    pub path: PathBuf,
    pub size: AssetSize,
}

impl AssetDescriptor {
    pub fn new(path: impl Into<PathBuf>, size: impl Into<AssetSize>) -> Self {
        Self {
            path: path.into(),
            size: size.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Renders a path with forward slashes regardless of platform.
pub(crate) fn url_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
