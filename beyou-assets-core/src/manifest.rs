//! Asset Manifest - Store Requirements as Data
//!
//! Every file a run produces is declared here. Names carry the raster
//! extension the store tooling expects; resolution rewrites it to `.svg`
//! because the engine only emits vector masters.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Pwa,
}

impl Platform {
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Pwa => "PWA",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Svg,
    Png,
    Jpg,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "svg" => Some(ExportFormat::Svg),
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpg),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
        }
    }

    pub fn is_raster(&self) -> bool {
        !matches!(self, ExportFormat::Svg)
    }
}

/// Rewrite a declared raster file name to the vector file actually written.
///
/// Names without a raster extension are returned unchanged.
pub fn vector_file_name(declared: &str) -> String {
    let path = Path::new(declared);
    let raster = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ExportFormat::from_extension)
        .is_some_and(|f| f.is_raster());

    if raster {
        path.with_extension(ExportFormat::Svg.extension())
            .to_string_lossy()
            .into_owned()
    } else {
        declared.to_string()
    }
}

/// One square icon requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    pub edge_length: u32,
    pub output_name: String,
    pub platform_label: String,
}

impl IconSpec {
    pub fn new(edge_length: u32, output_name: &str, platform_label: &str) -> Self {
        Self {
            edge_length,
            output_name: output_name.to_string(),
            platform_label: platform_label.to_string(),
        }
    }
}

/// One splash screen or feature graphic requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchScreenSpec {
    pub width: u32,
    pub height: u32,
    pub output_name: String,
}

impl LaunchScreenSpec {
    pub fn new(width: u32, height: u32, output_name: &str) -> Self {
        Self {
            width,
            height,
            output_name: output_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosAssets {
    pub icons: Vec<IconSpec>,
    pub launch_screens: Vec<LaunchScreenSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidAssets {
    pub icons: Vec<IconSpec>,
    pub feature_graphic: LaunchScreenSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetManifest {
    pub ios: IosAssets,
    pub android: AndroidAssets,
    pub pwa_sizes: Vec<u32>,
}

impl AssetManifest {
    /// App Store and Play Store requirements for BeYou
    pub fn beyou() -> Self {
        Self {
            ios: IosAssets {
                icons: vec![
                    IconSpec::new(1024, "AppIcon-1024.png", "App Store"),
                    IconSpec::new(180, "AppIcon-180.png", "iPhone"),
                    IconSpec::new(167, "AppIcon-167.png", "iPad Pro"),
                    IconSpec::new(152, "AppIcon-152.png", "iPad"),
                    IconSpec::new(120, "AppIcon-120.png", "iPhone"),
                    IconSpec::new(87, "AppIcon-87.png", "iPhone"),
                    IconSpec::new(80, "AppIcon-80.png", "iPad"),
                    IconSpec::new(76, "AppIcon-76.png", "iPad"),
                    IconSpec::new(60, "AppIcon-60.png", "iPhone"),
                    IconSpec::new(58, "AppIcon-58.png", "iPhone"),
                    IconSpec::new(40, "AppIcon-40.png", "iPad"),
                    IconSpec::new(29, "AppIcon-29.png", "iPhone/iPad"),
                    IconSpec::new(20, "AppIcon-20.png", "iPad"),
                ],
                launch_screens: vec![
                    LaunchScreenSpec::new(1290, 2796, "LaunchScreen-iPhone14ProMax.png"),
                    LaunchScreenSpec::new(1179, 2556, "LaunchScreen-iPhone14Pro.png"),
                    LaunchScreenSpec::new(1170, 2532, "LaunchScreen-iPhone13.png"),
                    LaunchScreenSpec::new(1125, 2436, "LaunchScreen-iPhone12mini.png"),
                    LaunchScreenSpec::new(828, 1792, "LaunchScreen-iPhone11.png"),
                ],
            },
            android: AndroidAssets {
                icons: vec![
                    IconSpec::new(512, "ic_launcher-512.png", "Play Store"),
                    IconSpec::new(192, "ic_launcher-192.png", "xxxhdpi"),
                    IconSpec::new(144, "ic_launcher-144.png", "xxhdpi"),
                    IconSpec::new(96, "ic_launcher-96.png", "xhdpi"),
                    IconSpec::new(72, "ic_launcher-72.png", "hdpi"),
                    IconSpec::new(48, "ic_launcher-48.png", "mdpi"),
                ],
                feature_graphic: LaunchScreenSpec::new(1024, 500, "feature-graphic.png"),
            },
            pwa_sizes: vec![192, 512],
        }
    }

    /// Walk one platform's tables in declaration order.
    pub fn resolve(&self, platform: Platform, layout: &OutputLayout) -> Vec<ArtifactRequest> {
        match platform {
            Platform::Ios => {
                let icons = self.ios.icons.iter().map(|icon| {
                    ArtifactRequest::icon(platform, layout.ios_icons_dir(), icon)
                });
                let screens = self.ios.launch_screens.iter().map(|screen| {
                    ArtifactRequest::launch_screen(
                        platform,
                        layout.ios_launch_screens_dir(),
                        screen,
                        format!("{} ({}x{})", screen.output_name, screen.width, screen.height),
                    )
                });
                icons.chain(screens).collect()
            }
            Platform::Android => {
                let graphic = &self.android.feature_graphic;
                let mut requests: Vec<_> = self
                    .android
                    .icons
                    .iter()
                    .map(|icon| ArtifactRequest::icon(platform, layout.android_icons_dir(), icon))
                    .collect();
                requests.push(ArtifactRequest::launch_screen(
                    platform,
                    layout.android_dir(),
                    graphic,
                    format!("Feature Graphic ({}x{})", graphic.width, graphic.height),
                ));
                requests
            }
            Platform::Pwa => self
                .pwa_sizes
                .iter()
                .map(|&size| ArtifactRequest {
                    platform,
                    destination: layout.pwa_icons_dir().join(format!("icon-{size}.svg")),
                    shape: Shape::Icon { edge_length: size },
                    description: format!("PWA Icon {size}x{size}"),
                })
                .collect(),
        }
    }

    /// Number of vector artifacts a full run writes.
    pub fn vector_artifact_count(&self) -> usize {
        self.ios.icons.len()
            + self.ios.launch_screens.len()
            + self.android.icons.len()
            + 1
            + self.pwa_sizes.len()
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::beyou()
    }
}

/// Which template a request renders with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    #[serde(rename_all = "camelCase")]
    Icon { edge_length: u32 },
    LaunchScreen { width: u32, height: u32 },
}

/// A manifest entry paired with its destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactRequest {
    pub platform: Platform,
    pub destination: PathBuf,
    pub shape: Shape,
    pub description: String,
}

impl ArtifactRequest {
    fn icon(platform: Platform, dir: PathBuf, icon: &IconSpec) -> Self {
        Self {
            platform,
            destination: dir.join(vector_file_name(&icon.output_name)),
            shape: Shape::Icon { edge_length: icon.edge_length },
            description: format!(
                "{} ({}x{}) - {}",
                icon.output_name, icon.edge_length, icon.edge_length, icon.platform_label
            ),
        }
    }

    fn launch_screen(
        platform: Platform,
        dir: PathBuf,
        screen: &LaunchScreenSpec,
        description: String,
    ) -> Self {
        Self {
            platform,
            destination: dir.join(vector_file_name(&screen.output_name)),
            shape: Shape::LaunchScreen { width: screen.width, height: screen.height },
            description,
        }
    }
}

/// Destination tree, rooted at the invocation directory by default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("mobile-assets")
    }

    pub fn ios_dir(&self) -> PathBuf {
        self.assets_dir().join("ios")
    }

    pub fn ios_icons_dir(&self) -> PathBuf {
        self.ios_dir().join("icons")
    }

    pub fn ios_launch_screens_dir(&self) -> PathBuf {
        self.ios_dir().join("launch-screens")
    }

    pub fn android_dir(&self) -> PathBuf {
        self.assets_dir().join("android")
    }

    pub fn android_icons_dir(&self) -> PathBuf {
        self.android_dir().join("icons")
    }

    /// Where the static web export picks up PWA icons
    pub fn pwa_icons_dir(&self) -> PathBuf {
        self.root.join("public").join("icons")
    }

    pub fn listing_path(&self) -> PathBuf {
        self.assets_dir().join("app-store-listing.json")
    }

    pub fn privacy_policy_path(&self) -> PathBuf {
        self.assets_dir().join("privacy-policy.md")
    }

    pub fn terms_of_service_path(&self) -> PathBuf {
        self.assets_dir().join("terms-of-service.md")
    }

    /// Every directory the run writes into, parents first.
    pub fn directories(&self) -> Vec<PathBuf> {
        vec![
            self.assets_dir(),
            self.ios_dir(),
            self.ios_icons_dir(),
            self.ios_launch_screens_dir(),
            self.android_dir(),
            self.android_icons_dir(),
            self.pwa_icons_dir(),
        ]
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_file_name_swaps_raster_extension() {
        assert_eq!(vector_file_name("AppIcon-180.png"), "AppIcon-180.svg");
        assert_eq!(vector_file_name("feature-graphic.PNG"), "feature-graphic.svg");
        assert_eq!(vector_file_name("cover.jpeg"), "cover.svg");
    }

    #[test]
    fn test_vector_file_name_keeps_other_names() {
        assert_eq!(vector_file_name("icon.svg"), "icon.svg");
        assert_eq!(vector_file_name("README"), "README");
        // only the extension is rewritten
        assert_eq!(vector_file_name("my.png.backup"), "my.png.backup");
    }

    #[test]
    fn test_manifest_counts() {
        let manifest = AssetManifest::beyou();
        assert_eq!(manifest.ios.icons.len(), 13);
        assert_eq!(manifest.ios.launch_screens.len(), 5);
        assert_eq!(manifest.android.icons.len(), 6);
        assert_eq!(manifest.pwa_sizes, vec![192, 512]);
        assert_eq!(manifest.vector_artifact_count(), 27);
    }

    #[test]
    fn test_resolve_ios_keeps_declaration_order() {
        let manifest = AssetManifest::beyou();
        let layout = OutputLayout::new("out");
        let requests = manifest.resolve(Platform::Ios, &layout);

        assert_eq!(requests.len(), 18);
        assert_eq!(
            requests[0].destination,
            PathBuf::from("out/mobile-assets/ios/icons/AppIcon-1024.svg")
        );
        assert_eq!(requests[0].shape, Shape::Icon { edge_length: 1024 });
        assert_eq!(requests[0].description, "AppIcon-1024.png (1024x1024) - App Store");
        assert_eq!(
            requests[13].destination,
            PathBuf::from("out/mobile-assets/ios/launch-screens/LaunchScreen-iPhone14ProMax.svg")
        );
        assert_eq!(requests[17].shape, Shape::LaunchScreen { width: 828, height: 1792 });
    }

    #[test]
    fn test_resolve_android_feature_graphic_is_flat() {
        let manifest = AssetManifest::beyou();
        let layout = OutputLayout::new("out");
        let requests = manifest.resolve(Platform::Android, &layout);

        assert_eq!(requests.len(), 7);
        let graphic = requests.last().unwrap();
        assert_eq!(
            graphic.destination,
            PathBuf::from("out/mobile-assets/android/feature-graphic.svg")
        );
        assert_eq!(graphic.description, "Feature Graphic (1024x500)");
    }

    #[test]
    fn test_resolve_pwa_uses_public_icons() {
        let manifest = AssetManifest::beyou();
        let layout = OutputLayout::new("out");
        let requests = manifest.resolve(Platform::Pwa, &layout);

        let paths: Vec<_> = requests.iter().map(|r| r.destination.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("out/public/icons/icon-192.svg"),
                PathBuf::from("out/public/icons/icon-512.svg"),
            ]
        );
    }

    #[test]
    fn test_directories_parents_first() {
        let layout = OutputLayout::new("out");
        let dirs = layout.directories();
        assert_eq!(dirs.len(), 7);
        for (i, dir) in dirs.iter().enumerate() {
            if let Some(parent) = dir.parent() {
                if let Some(pos) = dirs.iter().position(|d| d == parent) {
                    assert!(pos < i, "{} listed before its parent", dir.display());
                }
            }
        }
    }
}
