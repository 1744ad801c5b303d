//! Output directory policy.

use std::path::{Path, PathBuf};

use crate::config::OutputConfig;

/// The kinds of files a generator writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Icons,
    SplashScreens,
    Favicon,
    Manifest,
}

/// Decides which directory an asset kind is written to.
///
/// `requested` is the directory passed at the call site, if any. Resolvers are
/// free to ignore it; the default one does so when an asset is published to
/// the public directory.
pub trait OutputResolver {
    fn output_dir(&self, kind: AssetKind, requested: Option<&Path>) -> PathBuf;
}

impl OutputResolver for OutputConfig {
    fn output_dir(&self, kind: AssetKind, requested: Option<&Path>) -> PathBuf {
        let (publish, configured) = match kind {
            AssetKind::Icons => (false, &self.icons),
            AssetKind::SplashScreens => (false, &self.splash),
            AssetKind::Favicon => (self.publish_favicon_to_public, &self.favicon),
            AssetKind::Manifest => (self.publish_manifest_to_public, &self.manifest),
        };

        if publish {
            return self.public_dir.clone();
        }
        requested.unwrap_or(configured.as_path()).to_path_buf()
    }
}

impl<R: OutputResolver + ?Sized> OutputResolver for &R {
    fn output_dir(&self, kind: AssetKind, requested: Option<&Path>) -> PathBuf {
        (**self).output_dir(kind, requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs() -> OutputConfig {
        OutputConfig {
            public_dir: "pub".into(),
            icons: "out/icons".into(),
            splash: "out/splash".into(),
            favicon: "out/favicon".into(),
            manifest: "out/manifest".into(),
            splash_links: "out/links.html".into(),
            publish_manifest_to_public: true,
            publish_favicon_to_public: true,
        }
    }

    #[test]
    fn requested_dir_wins_for_images() {
        let outputs = outputs();
        let requested = Path::new("custom");
        assert_eq!(outputs.output_dir(AssetKind::Icons, Some(requested)), requested);
        assert_eq!(outputs.output_dir(AssetKind::SplashScreens, None), Path::new("out/splash"));
    }

    #[test]
    fn publishing_overrides_requested_dir() {
        let outputs = outputs();
        let requested = Path::new("custom");
        assert_eq!(outputs.output_dir(AssetKind::Favicon, Some(requested)), Path::new("pub"));
        assert_eq!(outputs.output_dir(AssetKind::Manifest, None), Path::new("pub"));
    }

    #[test]
    fn unpublished_assets_use_dedicated_dirs() {
        let outputs = OutputConfig {
            publish_manifest_to_public: false,
            publish_favicon_to_public: false,
            ..outputs()
        };
        assert_eq!(outputs.output_dir(AssetKind::Favicon, None), Path::new("out/favicon"));
        assert_eq!(
            outputs.output_dir(AssetKind::Favicon, Some(Path::new("custom"))),
            Path::new("custom")
        );
        assert_eq!(outputs.output_dir(AssetKind::Manifest, None), Path::new("out/manifest"));
    }
}
