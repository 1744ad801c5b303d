//! Entry points tying configuration, naming and output policy together.

use std::path::{Path, PathBuf};

use crate::asset::AssetDescriptor;
use crate::config::PwaConfig;
use crate::error::Result;
use crate::generate::favicon::generate_favicon;
use crate::generate::icon::generate_app_icons;
use crate::generate::splash::generate_splash_screens;
use crate::generate::{FaviconOptions, IconOptions, SplashOptions};
use crate::links::{self, SplashLinkEntry};
use crate::manifest::{Manifest, ManifestData};
use crate::naming::{NameGenerator, UuidNames};
use crate::output::{AssetKind, OutputResolver};

/// Generates every PWA asset from one [`PwaConfig`].
///
/// Each call resolves its options against the configuration once, renders,
/// writes, and returns. Nothing is cached between calls.
///
/// File names come from a [`NameGenerator`] (random UUIDs by default) and
/// directories from an [`OutputResolver`] (the configuration's
/// [`OutputConfig`](crate::OutputConfig) by default). Both can be swapped,
/// which tests use to get predictable paths.
///
/// # Example
///
/// ```no_run
/// use pwa_assets::{AssetGenerator, HexColor, IconOptions, PwaConfig};
///
/// let generator = AssetGenerator::new(PwaConfig::from_file("pwa.json")?);
///
/// let icons = generator.app_icons(
///     "logo.png",
///     IconOptions::new().sizes([192, 512]).background(HexColor::parse("#1e1e1e")?),
/// )?;
/// assert_eq!(icons.len(), 2);
///
/// let favicon = generator.generate_assets("logo.png", "WX", Some("Weather"), None)?;
/// println!("favicon written to {}", favicon.display());
/// # Ok::<(), pwa_assets::Error>(())
/// ```
pub struct AssetGenerator {
    config: PwaConfig,
    names: Box<dyn NameGenerator>,
    outputs: Option<Box<dyn OutputResolver>>,
}

impl AssetGenerator {
    pub fn new(config: PwaConfig) -> Self {
        Self {
            config,
            names: Box::new(UuidNames),
            outputs: None,
        }
    }

    /// Replaces the file name strategy.
    pub fn with_name_generator(mut self, names: impl NameGenerator + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    /// Replaces the output directory policy.
    pub fn with_output_resolver(mut self, outputs: impl OutputResolver + 'static) -> Self {
        self.outputs = Some(Box::new(outputs));
        self
    }

    pub fn config(&self) -> &PwaConfig {
        &self.config
    }

    fn outputs(&self) -> &dyn OutputResolver {
        match &self.outputs {
            Some(outputs) => &**outputs,
            None => &self.config.output,
        }
    }

    /// Renders one square PNG per size from the image at `image_path`.
    pub fn app_icons(&self, image_path: impl AsRef<Path>, options: IconOptions) -> Result<Vec<AssetDescriptor>> {
        let job = options.resolve(&self.config, self.outputs())?;
        generate_app_icons(image_path.as_ref(), &job, &*self.names)
    }

    /// Renders one PNG per screen size from the image at `image_path`.
    pub fn splash_screens(
        &self,
        image_path: impl AsRef<Path>,
        options: SplashOptions,
    ) -> Result<Vec<AssetDescriptor>> {
        let job = options.resolve(&self.config, self.outputs())?;
        generate_splash_screens(image_path.as_ref(), &job, &*self.names)
    }

    /// Renders `letters` into the favicon and returns its path.
    pub fn favicon(&self, letters: &str, options: FaviconOptions) -> Result<PathBuf> {
        let job = options.resolve(&self.config, self.outputs())?;
        generate_favicon(letters, &job)
    }

    /// Writes `manifest.webmanifest` and returns its path.
    pub fn write_manifest(&self, data: ManifestData) -> Result<PathBuf> {
        let manifest = Manifest::build(data, &self.config.manifest);
        let dir = self.outputs().output_dir(AssetKind::Manifest, None);
        manifest.write_to(&dir)
    }

    /// Writes the splash `<link>` fragment to `file`, or to the configured path.
    pub fn write_splash_links(&self, entries: &[SplashLinkEntry], file: Option<&Path>) -> Result<PathBuf> {
        let file = file.unwrap_or(self.config.output.splash_links.as_path());
        links::write_splash_links(entries, file, self.config.asset_base_url.as_deref())
    }

    /// Returns the splash `<link>` fragment if it has been written.
    pub fn read_splash_links(&self, file: Option<&Path>) -> Result<Option<String>> {
        links::read_splash_links(file.unwrap_or(self.config.output.splash_links.as_path()))
    }

    /// Writes the manifest, then the splash link fragment.
    pub fn generate_asset_files(
        &self,
        manifest: ManifestData,
        splash_screens: &[SplashLinkEntry],
        links_file: Option<&Path>,
    ) -> Result<()> {
        self.write_manifest(manifest)?;
        self.write_splash_links(splash_screens, links_file)?;
        Ok(())
    }

    /// Runs every generator with configured defaults and returns the favicon path.
    ///
    /// Order: icons, splash screens, favicon, manifest, splash links. The first
    /// error aborts the remaining stages. Manifest overrides without icons get
    /// the icons generated here.
    pub fn generate_assets(
        &self,
        image_path: impl AsRef<Path>,
        letters: &str,
        caption: Option<&str>,
        manifest: Option<ManifestData>,
    ) -> Result<PathBuf> {
        let image_path = image_path.as_ref();

        let icons = self.app_icons(image_path, IconOptions::new())?;

        let mut splash_options = SplashOptions::new();
        splash_options.caption = caption.map(str::to_string);
        let splash_screens = self.splash_screens(image_path, splash_options)?;

        let favicon = self.favicon(letters, FaviconOptions::new())?;

        let mut manifest = manifest.unwrap_or_default();
        if manifest.icons.is_empty() {
            manifest.icons = icons;
        }
        self.write_manifest(manifest)?;

        let entries: Vec<SplashLinkEntry> = splash_screens.iter().map(SplashLinkEntry::from).collect();
        self.write_splash_links(&entries, None)?;

        Ok(favicon)
    }
}

impl Default for AssetGenerator {
    fn default() -> Self {
        Self::new(PwaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetSize, ScreenSize};
    use crate::config::{OutputConfig, SizeConfig};
    use crate::error::Error;
    use crate::generate::testing::{decode, write_source};
    use crate::manifest::{MANIFEST_FILE_NAME, ManifestIcon};
    use crate::naming::SequentialNames;
    use tempfile::TempDir;

    fn small_config(root: &Path) -> PwaConfig {
        PwaConfig {
            sizes: SizeConfig {
                icons: vec![48, 96],
                splash: vec![ScreenSize::portrait(60, 100), ScreenSize::new(100, 60, "landscape")],
            },
            output: OutputConfig::rooted_at(root),
            ..PwaConfig::default()
        }
    }

    fn generator(root: &Path) -> AssetGenerator {
        AssetGenerator::new(small_config(root)).with_name_generator(SequentialNames::new())
    }

    #[test]
    fn generate_assets_runs_every_stage() {
        let tmp = TempDir::new().unwrap();
        let source = write_source(tmp.path(), 32, 32);
        let generator = generator(tmp.path());
        let config = generator.config().clone();

        let favicon = generator.generate_assets(&source, "WX", Some("Weather"), None).unwrap();

        assert_eq!(favicon, config.output.public_dir.join("favicon.ico"));
        assert_eq!(decode(&favicon).dimensions(), (64, 64));

        assert!(config.output.icons.join("app_icon_0.png").exists());
        assert!(config.output.icons.join("app_icon_1.png").exists());
        assert!(config.output.splash.join("splash_screen_2.png").exists());
        assert!(config.output.splash.join("splash_screen_3.png").exists());

        let manifest_path = config.output.public_dir.join(MANIFEST_FILE_NAME);
        let manifest = Manifest::from_json(&std::fs::read_to_string(manifest_path).unwrap()).unwrap();
        assert_eq!(manifest.name, config.manifest.name);
        let sizes: Vec<_> = manifest.icons.iter().map(|i| i.sizes.clone()).collect();
        assert_eq!(sizes, vec![AssetSize::Square(48), AssetSize::Square(96)]);

        let links = generator.read_splash_links(None).unwrap().unwrap();
        assert_eq!(links.lines().count(), 2);
        assert!(links.contains("splash_screen_2.png"));
        assert!(links.contains("(orientation: landscape)"));
    }

    #[test]
    fn manifest_overrides_keep_generated_icons() {
        let tmp = TempDir::new().unwrap();
        let source = write_source(tmp.path(), 16, 16);
        let generator = generator(tmp.path());

        let overrides = ManifestData::default().name("Weather").short_name("Wx");
        generator.generate_assets(&source, "W", None, Some(overrides)).unwrap();

        let path = generator.config().output.public_dir.join(MANIFEST_FILE_NAME);
        let manifest = Manifest::from_json(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(manifest.name, "Weather");
        assert_eq!(manifest.short_name, "Wx");
        assert_eq!(manifest.icons.len(), 2);
    }

    #[test]
    fn failing_stage_aborts_later_stages() {
        let tmp = TempDir::new().unwrap();
        let generator = generator(tmp.path());

        let result = generator.generate_assets(tmp.path().join("missing.png"), "AB", None, None);

        assert!(matches!(result, Err(Error::Image { .. })));
        let config = generator.config();
        assert!(!config.output.public_dir.exists());
        assert!(!config.output.splash_links.exists());
    }

    #[test]
    fn generate_asset_files_writes_manifest_then_links() {
        let tmp = TempDir::new().unwrap();
        let generator = generator(tmp.path());
        let links_file = tmp.path().join("head/links.html");

        let manifest = ManifestData::with_icons(vec![AssetDescriptor::new("a.png", 192)]);
        let entries = [SplashLinkEntry::from(AssetDescriptor::new("s.png", ScreenSize::portrait(750, 1334)))];
        generator.generate_asset_files(manifest, &entries, Some(&links_file)).unwrap();

        let manifest_path = generator.config().output.public_dir.join(MANIFEST_FILE_NAME);
        let manifest = Manifest::from_json(&std::fs::read_to_string(manifest_path).unwrap()).unwrap();
        assert_eq!(
            manifest.icons,
            vec![ManifestIcon {
                src: "a.png".into(),
                sizes: AssetSize::Square(192),
                mime_type: "image/png".into(),
            }]
        );
        assert!(std::fs::read_to_string(links_file).unwrap().contains("href=\"s.png\""));
    }

    #[test]
    fn invalid_links_fail_after_manifest() {
        let tmp = TempDir::new().unwrap();
        let generator = generator(tmp.path());
        let links_file = tmp.path().join("links.html");

        let entries = [SplashLinkEntry::default()];
        let result = generator.generate_asset_files(ManifestData::default(), &entries, Some(&links_file));

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(generator.config().output.public_dir.join(MANIFEST_FILE_NAME).exists());
        assert!(!links_file.exists());
    }

    #[test]
    fn manifest_goes_to_dedicated_dir_when_not_published() {
        let tmp = TempDir::new().unwrap();
        let mut config = small_config(tmp.path());
        config.output.publish_manifest_to_public = false;
        let generator = AssetGenerator::new(config);

        let path = generator.write_manifest(ManifestData::default()).unwrap();

        assert_eq!(path, generator.config().output.manifest.join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn custom_output_resolver_is_used() {
        struct Flat(PathBuf);

        impl OutputResolver for Flat {
            fn output_dir(&self, _kind: AssetKind, _requested: Option<&Path>) -> PathBuf {
                self.0.clone()
            }
        }

        let tmp = TempDir::new().unwrap();
        let source = write_source(tmp.path(), 8, 8);
        let flat = tmp.path().join("flat");
        let generator = generator(tmp.path()).with_output_resolver(Flat(flat.clone()));

        let icons = generator.app_icons(&source, IconOptions::new().sizes([16])).unwrap();
        let favicon = generator.favicon("A", FaviconOptions::new()).unwrap();

        assert_eq!(icons[0].path, flat.join("app_icon_0.png"));
        assert_eq!(favicon, flat.join("favicon.ico"));
    }

    #[test]
    fn splash_links_use_asset_base_url() {
        let tmp = TempDir::new().unwrap();
        let mut config = small_config(tmp.path());
        config.asset_base_url = Some("https://example.com/assets".into());
        let generator = AssetGenerator::new(config);

        let entries = [SplashLinkEntry::from(AssetDescriptor::new("s.png", ScreenSize::portrait(1, 2)))];
        generator.write_splash_links(&entries, None).unwrap();

        let links = generator.read_splash_links(None).unwrap().unwrap();
        assert!(links.contains("href=\"https://example.com/assets/s.png\""));
    }
}
