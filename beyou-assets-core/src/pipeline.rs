//! Generation Pipeline - Single Entry Point
//!
//! Phases run strictly in order: Setup, iOS, Android, PWA, Documents.
//! The first failure stops the run. Files written by earlier phases stay on
//! disk; there is no rollback.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, debug_span, info};

use crate::documents::{privacy_policy, terms_of_service, ListingDocument};
use crate::hashing::{compute_run_digest, sha256_hex};
use crate::manifest::{ArtifactRequest, AssetManifest, OutputLayout, Platform, Shape};
use crate::materialize::ensure_directories;
use crate::palette::ColorPalette;
use crate::render::{render_icon, render_launch_screen};
use crate::GENERATOR_VERSION;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    WriteArtifact { path: PathBuf, source: io::Error },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Ios,
    Android,
    Pwa,
    Documents,
}

impl Phase {
    pub fn is_vector(self) -> bool {
        matches!(self, Phase::Ios | Phase::Android | Phase::Pwa)
    }
}

impl From<Platform> for Phase {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Phase::Ios,
            Platform::Android => Phase::Android,
            Platform::Pwa => Phase::Pwa,
        }
    }
}

/// Manual follow-up once a run completes. Advisory only.
pub const NEXT_STEPS: [&str; 5] = [
    "Convert SVG files to PNG using online tools or design software",
    "Review and customize the app store listing content",
    "Have legal review the privacy policy and terms of service",
    "Create app store screenshots using the generated assets",
    "Submit to Apple App Store and Google Play Store",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenArtifact {
    pub phase: Phase,
    /// Relative to the output root, `/`-separated
    pub path: String,
    pub description: String,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generator_version: String,
    pub root: PathBuf,
    pub generated_on: NaiveDate,
    pub created_directories: Vec<PathBuf>,
    pub artifacts: Vec<WrittenArtifact>,
    /// Digest over vector artifacts only; documents carry the date
    pub vector_digest: String,
}

impl GenerationReport {
    pub fn vector_artifacts(&self) -> impl Iterator<Item = &WrittenArtifact> {
        self.artifacts.iter().filter(|a| a.phase.is_vector())
    }

    pub fn artifacts_for(&self, phase: Phase) -> impl Iterator<Item = &WrittenArtifact> {
        self.artifacts.iter().filter(move |a| a.phase == phase)
    }
}

/// The generation pipeline - manifest, palette and layout are fixed at construction
pub struct AssetPipeline {
    manifest: AssetManifest,
    palette: ColorPalette,
    layout: OutputLayout,
}

impl AssetPipeline {
    pub fn new(manifest: AssetManifest, palette: ColorPalette, layout: OutputLayout) -> Self {
        Self { manifest, palette, layout }
    }

    /// BeYou manifest and palette, writing under `root`
    pub fn beyou(root: impl Into<PathBuf>) -> Self {
        Self::new(
            AssetManifest::beyou(),
            ColorPalette::beyou(),
            OutputLayout::new(root),
        )
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Regenerate every artifact. `today` is stamped into the legal documents.
    pub fn run(&self, today: NaiveDate) -> Result<GenerationReport, PipelineError> {
        let created_directories = {
            let _span = debug_span!("phase", phase = "setup").entered();
            ensure_directories(&self.layout.directories())?
        };

        let mut artifacts = vec![];

        info!("📱 Generating iOS assets...");
        artifacts.extend(self.generate_platform(Platform::Ios)?);

        info!("🤖 Generating Android assets...");
        artifacts.extend(self.generate_platform(Platform::Android)?);

        info!("🌐 Generating PWA assets...");
        artifacts.extend(self.generate_platform(Platform::Pwa)?);

        artifacts.extend(self.generate_documents(today)?);

        let vector_digest = compute_run_digest(
            artifacts
                .iter()
                .filter(|a| a.phase.is_vector())
                .map(|a| (a.path.as_str(), a.sha256.as_str())),
        )?;
        debug!(%vector_digest, artifacts = artifacts.len(), "run complete");

        Ok(GenerationReport {
            generator_version: GENERATOR_VERSION.to_string(),
            root: self.layout.root().to_path_buf(),
            generated_on: today,
            created_directories,
            artifacts,
            vector_digest,
        })
    }

    /// Render one platform's manifest entries in declaration order.
    pub fn generate_platform(&self, platform: Platform) -> Result<Vec<WrittenArtifact>, PipelineError> {
        let phase = Phase::from(platform);
        let _span = debug_span!("phase", phase = platform.display_name()).entered();

        self.manifest
            .resolve(platform, &self.layout)
            .iter()
            .map(|request| {
                let markup = self.render(request);
                let written = self.write_artifact(
                    phase,
                    &request.destination,
                    &request.description,
                    markup.as_bytes(),
                )?;
                info!("  ✅ {}", request.description);
                Ok(written)
            })
            .collect()
    }

    /// Listing JSON, privacy policy, terms of service
    pub fn generate_documents(&self, today: NaiveDate) -> Result<Vec<WrittenArtifact>, PipelineError> {
        let _span = debug_span!("phase", phase = "documents").entered();
        let mut written = vec![];

        let listing = ListingDocument::beyou().to_json_pretty()?;
        written.push(self.write_artifact(
            Phase::Documents,
            &self.layout.listing_path(),
            "App store listing",
            listing.as_bytes(),
        )?);
        info!("📝 Generated app store listing content");

        written.push(self.write_artifact(
            Phase::Documents,
            &self.layout.privacy_policy_path(),
            "Privacy policy",
            privacy_policy(today).as_bytes(),
        )?);
        info!("📋 Generated privacy policy template");

        written.push(self.write_artifact(
            Phase::Documents,
            &self.layout.terms_of_service_path(),
            "Terms of service",
            terms_of_service(today).as_bytes(),
        )?);
        info!("📋 Generated terms of service template");

        Ok(written)
    }

    fn render(&self, request: &ArtifactRequest) -> String {
        match request.shape {
            Shape::Icon { edge_length } => render_icon(edge_length, &self.palette),
            Shape::LaunchScreen { width, height } => {
                render_launch_screen(width, height, &self.palette)
            }
        }
    }

    fn write_artifact(
        &self,
        phase: Phase,
        path: &Path,
        description: &str,
        content: &[u8],
    ) -> Result<WrittenArtifact, PipelineError> {
        fs::write(path, content).map_err(|source| PipelineError::WriteArtifact {
            path: path.to_path_buf(),
            source,
        })?;

        let relative = self.relative_path(path);
        let sha256 = sha256_hex(content);
        debug!(path = %relative, bytes = content.len(), %sha256, "wrote artifact");

        Ok(WrittenArtifact {
            phase,
            path: relative,
            description: description.to_string(),
            bytes: content.len(),
            sha256,
        })
    }

    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(self.layout.root()).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for AssetPipeline {
    fn default() -> Self {
        Self::beyou(".")
    }
}
