//! Contract Invariant Tests
//!
//! These tests verify the guarantees a store submission depends on.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::Command;

use chrono::NaiveDate;
use proptest::prelude::*;

use beyou_assets_core::{
    manifest::vector_file_name, render_icon, render_launch_screen, AssetManifest, AssetPipeline,
    ColorPalette, ListingDocument, Phase, PipelineError,
};

const EXPECTED_PATHS: [&str; 8] = [
    "mobile-assets/ios/icons/AppIcon-1024.svg",
    "mobile-assets/ios/launch-screens/LaunchScreen-iPhone11.svg",
    "mobile-assets/android/icons/ic_launcher-48.svg",
    "mobile-assets/android/feature-graphic.svg",
    "public/icons/icon-192.svg",
    "public/icons/icon-512.svg",
    "mobile-assets/app-store-listing.json",
    "mobile-assets/privacy-policy.md",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn list_files(root: &Path) -> BTreeSet<String> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeSet<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                out.insert(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    let mut out = BTreeSet::new();
    walk(root, root, &mut out);
    out
}

proptest! {
    #[test]
    fn invariant_icon_scales_linearly(size in 1u32..4096) {
        let palette = ColorPalette::beyou();
        let svg = render_icon(size, &palette);
        let s = f64::from(size);

        prop_assert_eq!(svg.matches("<linearGradient").count(), 1);
        prop_assert_eq!(svg.matches("<circle").count(), 1);
        let radius = format!(r#"r="{}""#, s / 2.0 - 2.0);
        let font_size = format!(r#"font-size="{}""#, s / 6.0);
        prop_assert!(svg.contains(&radius));
        prop_assert!(svg.contains(&font_size));
        prop_assert_eq!(svg, render_icon(size, &palette));
    }

    #[test]
    fn invariant_launch_screen_canvas_matches(width in 1u32..5000, height in 1u32..5000) {
        let svg = render_launch_screen(width, height, &ColorPalette::beyou());
        let root = format!(r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}""#);
        prop_assert!(svg.contains(&root));
        prop_assert_eq!(svg.matches("<svg ").count(), 1);
    }
}

#[test]
fn invariant_every_manifest_entry_written_once() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = AssetManifest::beyou();
    let report = AssetPipeline::beyou(tmp.path()).run(date(2026, 10, 16)).unwrap();

    let mut expected = vec![];
    for icon in &manifest.ios.icons {
        expected.push(format!("mobile-assets/ios/icons/{}", vector_file_name(&icon.output_name)));
    }
    for screen in &manifest.ios.launch_screens {
        expected.push(format!(
            "mobile-assets/ios/launch-screens/{}",
            vector_file_name(&screen.output_name)
        ));
    }
    for icon in &manifest.android.icons {
        expected.push(format!("mobile-assets/android/icons/{}", vector_file_name(&icon.output_name)));
    }
    expected.push("mobile-assets/android/feature-graphic.svg".to_string());
    for size in &manifest.pwa_sizes {
        expected.push(format!("public/icons/icon-{size}.svg"));
    }

    let written: Vec<_> = report.vector_artifacts().map(|a| a.path.clone()).collect();
    assert_eq!(written, expected);

    let on_disk = list_files(tmp.path());
    assert_eq!(on_disk.len(), 30);
    for path in &expected {
        assert!(on_disk.contains(path), "missing {path}");
    }
    assert!(on_disk.iter().all(|p| !p.ends_with(".png")));
}

#[test]
fn invariant_second_run_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let pipeline = AssetPipeline::beyou(tmp.path());

    let first = pipeline.run(date(2026, 10, 16)).unwrap();
    let svg_before = fs::read(tmp.path().join("mobile-assets/ios/icons/AppIcon-180.svg")).unwrap();
    let files_before = list_files(tmp.path());

    let second = pipeline.run(date(2026, 10, 17)).unwrap();
    let svg_after = fs::read(tmp.path().join("mobile-assets/ios/icons/AppIcon-180.svg")).unwrap();

    assert!(second.created_directories.is_empty());
    assert_eq!(first.vector_digest, second.vector_digest);
    assert_eq!(svg_before, svg_after);
    assert_eq!(files_before, list_files(tmp.path()));

    // documents differ only by the stamped date
    let policy = |r: &beyou_assets_core::GenerationReport| {
        r.artifacts_for(Phase::Documents)
            .find(|a| a.path.ends_with("privacy-policy.md"))
            .unwrap()
            .sha256
            .clone()
    };
    assert_ne!(policy(&first), policy(&second));
}

#[test]
fn invariant_listing_schema() {
    let tmp = tempfile::tempdir().unwrap();
    AssetPipeline::beyou(tmp.path()).run(date(2026, 10, 16)).unwrap();

    let raw = fs::read_to_string(tmp.path().join("mobile-assets/app-store-listing.json")).unwrap();
    let listing: ListingDocument = serde_json::from_str(&raw).unwrap();

    assert!(!listing.keywords.is_empty());
    assert_eq!(listing.categories.primary, "Social Networking");
    assert_eq!(listing.age_rating, "17+");
}

#[test]
fn invariant_documents_carry_date() {
    let tmp = tempfile::tempdir().unwrap();
    AssetPipeline::beyou(tmp.path()).run(date(2026, 2, 3)).unwrap();

    for name in ["privacy-policy.md", "terms-of-service.md"] {
        let doc = fs::read_to_string(tmp.path().join("mobile-assets").join(name)).unwrap();
        assert!(doc.contains("\nLast updated: 2/3/2026\n"), "{name} lacks date");
    }
}

#[test]
fn invariant_root_is_a_file_fails_setup() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("occupied");
    fs::write(&root, b"").unwrap();

    let err = AssetPipeline::beyou(&root).run(date(2026, 10, 16)).unwrap_err();
    assert!(matches!(err, PipelineError::CreateDirectory { .. }));
    assert!(err.to_string().starts_with("Failed to create directory"));
}

#[test]
fn invariant_cli_zero_arguments_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_beyou-assets-cli");

    for _ in 0..2 {
        let output = Command::new(bin).current_dir(tmp.path()).output().unwrap();
        assert!(output.status.success());
        assert!(output.stderr.is_empty());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Asset generation complete"));
        assert!(stdout.contains("AppIcon-180.png (180x180) - iPhone"));
        assert!(stdout.trim_end().ends_with("🚀"));
    }

    for path in EXPECTED_PATHS {
        assert!(tmp.path().join(path).is_file(), "missing {path}");
    }
    assert!(tmp.path().join("mobile-assets/terms-of-service.md").is_file());
    assert_eq!(list_files(tmp.path()).len(), 30);
}

#[test]
fn invariant_cli_reports_io_failure() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("mobile-assets"), b"in the way").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_beyou-assets-cli"))
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: Failed to create directory"));
}
