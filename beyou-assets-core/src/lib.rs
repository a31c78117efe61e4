//! BeYou Assets Core - App Store Asset Generator
//!
//! One run regenerates every store asset for the BeYou app:
//! 1. Vector icons and launch screens for iOS, Android and the PWA
//! 2. The app store listing as JSON
//! 3. Privacy policy and terms of service templates
//!
//! Output is SVG only. Rasterizing to PNG is a manual follow-up step.

pub mod palette;
pub mod manifest;
pub mod render;
pub mod materialize;
pub mod documents;
pub mod hashing;
pub mod pipeline;
pub mod logging;

pub use palette::ColorPalette;
pub use manifest::{AssetManifest, IconSpec, LaunchScreenSpec, OutputLayout, Platform};
pub use render::{render_icon, render_launch_screen};
pub use documents::{ListingDocument, privacy_policy, terms_of_service};
pub use hashing::{canonical_json, compute_run_digest, sha256_hex};
pub use pipeline::{AssetPipeline, GenerationReport, Phase, PipelineError, WrittenArtifact, NEXT_STEPS};

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
