//! Apple splash screen `<link>` markup.
//!
//! Each splash screen becomes one line:
//!
//! ```html
//! <link rel="apple-touch-startup-image" href="splash/a.png" media="screen and (device-width: 750) and (device-height: 1334) and (orientation: portrait)">
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::{AssetDescriptor, AssetSize, ScreenSize, url_path};
use crate::error::{Error, Result};
use crate::generate::ensure_dir;

/// One splash screen to link.
///
/// Both fields are optional so externally supplied data can be validated;
/// [`render_splash_links`] rejects entries missing either one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct SplashLinkEntry {
    pub path: Option<String>,
    pub size: Option<AssetSize>,
}

impl From<&AssetDescriptor> for SplashLinkEntry {
    fn from(descriptor: &AssetDescriptor) -> Self {
        Self {
            path: Some(url_path(&descriptor.path)),
            size: Some(descriptor.size.clone()),
        }
    }
}

impl From<AssetDescriptor> for SplashLinkEntry {
    fn from(descriptor: AssetDescriptor) -> Self {
        Self::from(&descriptor)
    }
}

/// Builds the link fragment, one newline-terminated tag per entry.
///
/// `base_url`, when set, is joined in front of every path. The whole batch
/// fails if any entry lacks a path or a `[width, height, orientation]` size.
pub fn render_splash_links(entries: &[SplashLinkEntry], base_url: Option<&str>) -> Result<String> {
    let validated = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| validate(index, entry))
        .collect::<Result<Vec<_>>>()?;

    let mut links = String::new();
    for (path, screen) in validated {
        links.push_str(&format!(
            r#"<link rel="apple-touch-startup-image" href="{}" media="screen and (device-width: {}) and (device-height: {}) and (orientation: {})">"#,
            asset_url(base_url, path),
            screen.width,
            screen.height,
            screen.orientation,
        ));
        links.push('\n');
    }
    Ok(links)
}

/// Renders the fragment and writes it to `file`, creating parent directories.
///
/// Nothing is written when validation fails.
pub fn write_splash_links(entries: &[SplashLinkEntry], file: &Path, base_url: Option<&str>) -> Result<PathBuf> {
    let links = render_splash_links(entries, base_url)?;

    if let Some(parent) = file.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(file, links).map_err(|e| Error::io(file, e))?;

    tracing::info!(path = %file.display(), count = entries.len(), "wrote splash screen links");
    Ok(file.to_path_buf())
}

/// Reads a previously written fragment, or `None` if the file does not exist.
pub fn read_splash_links(file: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(file) {
        Ok(links) => Ok(Some(links)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(file, e)),
    }
}

fn validate(index: usize, entry: &SplashLinkEntry) -> Result<(&str, &ScreenSize)> {
    let path = entry
        .path
        .as_deref()
        .ok_or_else(|| Error::InvalidInput(format!("splash screen {index} has no \"path\"")))?;
    let size = entry
        .size
        .as_ref()
        .ok_or_else(|| Error::InvalidInput(format!("splash screen {index} has no \"size\"")))?;
    let screen = size.as_screen().ok_or_else(|| {
        Error::InvalidInput(format!(
            "splash screen {index} size must be [width, height, orientation], got {size}"
        ))
    })?;
    Ok((path, screen))
}

fn asset_url(base_url: Option<&str>, path: &str) -> String {
    match base_url {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(path: &str, width: u32, height: u32) -> SplashLinkEntry {
        SplashLinkEntry::from(AssetDescriptor::new(path, ScreenSize::portrait(width, height)))
    }

    #[test]
    fn renders_one_line_per_entry() {
        let links = render_splash_links(&[entry("s/a.png", 750, 1334), entry("s/b.png", 640, 1136)], None).unwrap();

        let lines: Vec<_> = links.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"<link rel="apple-touch-startup-image" href="s/a.png" media="screen and (device-width: 750) and (device-height: 1334) and (orientation: portrait)">"#
        );
        assert!(lines[1].contains("(device-width: 640) and (device-height: 1136)"));
        assert!(links.ends_with('\n'));
    }

    #[test]
    fn orientation_is_carried_verbatim() {
        let entries = [SplashLinkEntry::from(AssetDescriptor::new(
            "l.png",
            ScreenSize::new(2732, 2048, "landscape"),
        ))];
        let links = render_splash_links(&entries, None).unwrap();
        assert!(links.contains("(orientation: landscape)"));
    }

    #[test]
    fn base_url_is_joined() {
        let links = render_splash_links(&[entry("/storage/a.png", 1, 2)], Some("https://cdn.example.com/")).unwrap();
        assert!(links.contains(r#"href="https://cdn.example.com/storage/a.png""#));
    }

    #[test]
    fn empty_batch_renders_empty_fragment() {
        assert_eq!(render_splash_links(&[], None).unwrap(), "");
    }

    #[test]
    fn entries_without_size_fail_and_write_nothing() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("partials/links.html");
        let entries = [
            SplashLinkEntry { path: Some("a.png".into()), size: None },
            SplashLinkEntry { path: Some("b.png".into()), size: None },
        ];

        let result = write_splash_links(&entries, &file, None);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(!file.exists());
        assert!(!file.parent().unwrap().exists());
    }

    #[test]
    fn one_bad_entry_aborts_the_batch() {
        let entries = [
            entry("a.png", 750, 1334),
            SplashLinkEntry { path: None, size: Some(ScreenSize::portrait(1, 1).into()) },
        ];
        assert!(matches!(render_splash_links(&entries, None), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn square_size_is_rejected() {
        let entries = [SplashLinkEntry::from(AssetDescriptor::new("icon.png", 192))];
        assert!(matches!(render_splash_links(&entries, None), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn entries_deserialize_from_json() {
        let entries: Vec<SplashLinkEntry> = serde_json::from_str(
            r#"[{ "path": "a.png", "size": [750, 1334, "portrait"] }, { "path": "b.png" }]"#,
        )
        .unwrap();
        assert_eq!(entries[0], entry("a.png", 750, 1334));
        assert_eq!(entries[1].size, None);
    }

    #[test]
    fn write_then_read_back() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("nested/dir/links.html");

        assert_eq!(read_splash_links(&file).unwrap(), None);

        let written = write_splash_links(&[entry("a.png", 10, 20)], &file, None).unwrap();
        assert_eq!(written, file);

        let content = read_splash_links(&file).unwrap().unwrap();
        assert!(content.starts_with("<link rel=\"apple-touch-startup-image\" href=\"a.png\""));
    }
}
