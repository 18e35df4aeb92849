//! iOS asset-catalog manifest (`Contents.json`).
//!
//! Derives the `images`/`info` structure Xcode expects from the declared
//! manifest slot table and serializes it with 2-space indentation. Entry
//! order follows slot declaration order, so a given catalog always
//! serializes identically.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::ManifestSlot;
use crate::error::{IconError, Result};

/// Author tag written into the manifest's `info` block.
pub const MANIFEST_AUTHOR: &str = "xcode";

/// Schema version of the `info` block.
pub const MANIFEST_VERSION: u32 = 1;

/// One entry in the manifest's `images` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

/// The constant `info` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

/// The full `Contents.json` structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

/// Build a manifest from the slot table, preserving slot order.
pub fn build_manifest(slots: &[ManifestSlot]) -> Manifest {
    let images = slots
        .iter()
        .map(|slot| ManifestEntry {
            size: slot.size.to_string(),
            idiom: slot.idiom.as_str().to_string(),
            filename: slot.filename.to_string(),
            scale: slot.scale.to_string(),
        })
        .collect();

    Manifest {
        images,
        info: ManifestInfo {
            version: MANIFEST_VERSION,
            author: MANIFEST_AUTHOR.to_string(),
        },
    }
}

/// Serialize a manifest to pretty-printed JSON.
pub fn manifest_json(manifest: &Manifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).map_err(|e| IconError::Io {
        path: "Contents.json".into(),
        message: format!("Failed to serialize manifest: {}", e),
    })
}

/// Write a manifest to disk.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = manifest_json(manifest)?;
    fs::write(path, json).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write manifest: {}", e),
    })?;
    Ok(())
}
