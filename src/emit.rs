//! Batch emitter.
//!
//! Flattens both catalogs into an ordered job list, then walks it:
//! ensure the destination directory, compose, write a lossless PNG,
//! record the outcome. One entry's failure never aborts the batch;
//! every failure is carried in the aggregate result so the caller can
//! report it. Only a missing source stops a run before it starts, and
//! that is handled before any job exists.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::catalog::{AndroidEntry, IosEntry, LAUNCHER_FILENAME};
use crate::compose::{compose, SourceAsset};
use crate::error::{IconError, Result};
use crate::output::{display_path, Printer};

/// One icon to produce: an identifier, a target edge length, and where
/// the file goes.
#[derive(Debug, Clone)]
pub struct IconJob {
    /// Entry identifier for reports (density folder or iOS filename).
    pub id: String,
    pub size: u32,
    pub dest: PathBuf,
}

/// A successfully written icon.
#[derive(Debug, Clone)]
pub struct WrittenIcon {
    pub id: String,
    pub size: u32,
    pub path: PathBuf,
}

/// A failed entry, kept with its identifier for the final report.
#[derive(Debug)]
pub struct EntryFailure {
    pub id: String,
    pub error: IconError,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub written: Vec<WrittenIcon>,
    pub failures: Vec<EntryFailure>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Flatten the catalogs into jobs, Android first, both in catalog order.
pub fn plan_jobs(
    android: &[AndroidEntry],
    ios: &[IosEntry],
    android_res: &Path,
    ios_assets: &Path,
) -> Vec<IconJob> {
    let mut jobs = Vec::with_capacity(android.len() + ios.len());

    for entry in android {
        jobs.push(IconJob {
            id: entry.folder(),
            size: entry.size,
            dest: android_res.join(entry.folder()).join(LAUNCHER_FILENAME),
        });
    }

    for entry in ios {
        jobs.push(IconJob {
            id: entry.filename.to_string(),
            size: entry.size,
            dest: ios_assets.join(entry.filename),
        });
    }

    jobs
}

/// Run every job in order, printing one status line per written file.
pub fn run(
    source: &SourceAsset,
    jobs: &[IconJob],
    padding_percent: f64,
    printer: &Printer,
) -> BatchResult {
    let mut result = BatchResult::default();

    for job in jobs {
        match emit_one(source, job, padding_percent) {
            Ok(()) => {
                printer.status(
                    "Writing",
                    &format!("{} ({}x{})", display_path(&job.dest), job.size, job.size),
                );
                result.written.push(WrittenIcon {
                    id: job.id.clone(),
                    size: job.size,
                    path: job.dest.clone(),
                });
            }
            Err(error) => {
                result.failures.push(EntryFailure {
                    id: job.id.clone(),
                    error,
                });
            }
        }
    }

    result
}

fn emit_one(source: &SourceAsset, job: &IconJob, padding_percent: f64) -> Result<()> {
    // Already-existing directories are fine; create_dir_all is idempotent.
    if let Some(dir) = job.dest.parent() {
        fs::create_dir_all(dir).map_err(|e| IconError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    let icon = compose(source, job.size, padding_percent)?;

    icon.save_with_format(&job.dest, ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: job.dest.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
