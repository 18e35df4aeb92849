//! appicon - Launcher icon pipeline generator
//!
//! A library for producing the full matrix of padded, platform-specific
//! launcher icons from a single source logo, plus the iOS asset-catalog
//! manifest that describes them.

pub mod catalog;
pub mod cli;
pub mod compose;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod output;

pub use catalog::{AndroidEntry, Idiom, IosEntry, ManifestSlot, SizeCatalog, LAUNCHER_FILENAME};
pub use compose::{compose, inset_for, SourceAsset};
pub use emit::{plan_jobs, BatchResult, EntryFailure, IconJob, WrittenIcon};
pub use error::{IconError, Result};
pub use manifest::{build_manifest, manifest_json, write_manifest, Manifest, ManifestEntry};
