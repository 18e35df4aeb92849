//! Generate command implementation.
//!
//! The batch command: decode the source logo once, write every catalog
//! entry as a padded PNG, write the iOS `Contents.json`, and report the
//! outcome. Per-entry failures are collected and reported at the end;
//! only a missing source aborts up front, before anything is written.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::SizeCatalog;
use crate::compose::SourceAsset;
use crate::emit;
use crate::error::{IconError, Result};
use crate::manifest::{build_manifest, write_manifest};
use crate::output::{display_path, plural, Printer};

/// Generate all launcher icons and the iOS manifest
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Source logo image
    #[arg(long, default_value = "assets/images/logo.png")]
    pub source: PathBuf,

    /// Android resource root
    #[arg(long, default_value = "android/app/src/main/res")]
    pub android_res: PathBuf,

    /// iOS app-icon asset catalog
    #[arg(long, default_value = "ios/Runner/Assets.xcassets/AppIcon.appiconset")]
    pub ios_assets: PathBuf,

    /// Padding around the logo, percent of the icon edge
    #[arg(long, default_value = "15")]
    pub padding: f64,

    /// Project root the other paths are resolved against
    #[arg(long)]
    pub root: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    if !(0.0..50.0).contains(&args.padding) {
        return Err(IconError::Validation {
            message: format!("padding must be in [0, 50), got {}", args.padding),
            help: Some("50% or more leaves no room for the logo".to_string()),
        });
    }

    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let source_path = root.join(&args.source);
    let android_res = root.join(&args.android_res);
    let ios_assets = root.join(&args.ios_assets);

    // Fatal if missing: there is nothing to composite, so nothing at all
    // gets written.
    let source = SourceAsset::load(&source_path)?;
    printer.info(
        "Source",
        &format!(
            "{} ({}x{})",
            display_path(&source_path),
            source.width(),
            source.height()
        ),
    );

    let jobs = emit::plan_jobs(
        &SizeCatalog::android(),
        &SizeCatalog::ios(),
        &android_res,
        &ios_assets,
    );
    let result = emit::run(&source, &jobs, args.padding, printer);

    for failure in &result.failures {
        printer.error(
            "Error",
            &format!("{} [{}]: {}", failure.id, failure.error.kind(), failure.error),
        );
    }

    let manifest = build_manifest(&SizeCatalog::ios_slots());
    let manifest_path = ios_assets.join("Contents.json");
    fs::create_dir_all(&ios_assets).map_err(|e| IconError::Io {
        path: ios_assets.clone(),
        message: format!("Failed to create directory: {}", e),
    })?;
    write_manifest(&manifest, &manifest_path)?;
    printer.status(
        "Writing",
        &format!(
            "{} ({})",
            display_path(&manifest_path),
            plural(manifest.images.len(), "entry", "entries")
        ),
    );

    if result.is_clean() {
        printer.status(
            "Finished",
            &format!("{} and 1 manifest", plural(result.written.len(), "icon", "icons")),
        );
        Ok(())
    } else {
        printer.warning(
            "Finished",
            &format!(
                "{} written, {} failed",
                plural(result.written.len(), "icon", "icons"),
                result.failures.len()
            ),
        );
        Err(IconError::Batch {
            failed: result.failures.len(),
            total: result.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_logo(root: &std::path::Path) {
        let dir = root.join("assets/images");
        fs::create_dir_all(&dir).unwrap();
        let logo = RgbaImage::from_pixel(512, 512, Rgba([10, 80, 160, 255]));
        logo.save(dir.join("logo.png")).unwrap();
    }

    fn args_for(root: &std::path::Path) -> GenerateArgs {
        GenerateArgs {
            source: PathBuf::from("assets/images/logo.png"),
            android_res: PathBuf::from("android/app/src/main/res"),
            ios_assets: PathBuf::from("ios/Runner/Assets.xcassets/AppIcon.appiconset"),
            padding: 15.0,
            root: Some(root.to_path_buf()),
        }
    }

    #[test]
    fn test_generate_full_project() {
        let dir = tempdir().unwrap();
        write_logo(dir.path());

        run(args_for(dir.path()), &Printer::new()).unwrap();

        let res = dir.path().join("android/app/src/main/res");
        for entry in SizeCatalog::android() {
            let path = res.join(entry.folder()).join("ic_launcher.png");
            let img = image::open(&path).unwrap().to_rgb8();
            assert_eq!(img.width(), entry.size);
        }

        let ios = dir.path().join("ios/Runner/Assets.xcassets/AppIcon.appiconset");
        for entry in SizeCatalog::ios() {
            assert!(ios.join(entry.filename).exists(), "{}", entry.filename);
        }

        let manifest: crate::manifest::Manifest =
            serde_json::from_str(&fs::read_to_string(ios.join("Contents.json")).unwrap())
                .unwrap();
        assert_eq!(manifest.images.len(), 15);
        assert_eq!(manifest.info.author, "xcode");
    }

    #[test]
    fn test_generate_padding_geometry() {
        // 512x512 source, xhdpi is 96px at 15% => logo pasted at (14,14).
        let dir = tempdir().unwrap();
        write_logo(dir.path());

        run(args_for(dir.path()), &Printer::new()).unwrap();

        let icon = image::open(
            dir.path()
                .join("android/app/src/main/res/mipmap-xhdpi/ic_launcher.png"),
        )
        .unwrap()
        .to_rgb8();
        assert_eq!(icon.get_pixel(13, 13).0, [255, 255, 255]);
        assert_eq!(icon.get_pixel(14, 14).0, [10, 80, 160]);
        assert_eq!(icon.get_pixel(81, 81).0, [10, 80, 160]);
        assert_eq!(icon.get_pixel(82, 82).0, [255, 255, 255]);
    }

    #[test]
    fn test_generate_missing_source_writes_nothing() {
        let dir = tempdir().unwrap();

        let err = run(args_for(dir.path()), &Printer::new()).unwrap_err();
        assert!(matches!(err, IconError::SourceNotFound { .. }));

        assert!(!dir.path().join("android").exists());
        assert!(!dir.path().join("ios").exists());
    }

    #[test]
    fn test_generate_rejects_out_of_range_padding() {
        let dir = tempdir().unwrap();
        write_logo(dir.path());

        let mut args = args_for(dir.path());
        args.padding = 50.0;
        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, IconError::Validation { .. }));

        let mut args = args_for(dir.path());
        args.padding = -1.0;
        assert!(matches!(
            run(args, &Printer::new()).unwrap_err(),
            IconError::Validation { .. }
        ));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempdir().unwrap();
        write_logo(dir.path());

        run(args_for(dir.path()), &Printer::new()).unwrap();
        let path = dir
            .path()
            .join("android/app/src/main/res/mipmap-mdpi/ic_launcher.png");
        let first = fs::read(&path).unwrap();

        // Re-running over existing directories and files is fine and
        // produces identical bytes.
        run(args_for(dir.path()), &Printer::new()).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }
}
