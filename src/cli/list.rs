//! List command implementation.
//!
//! Prints the builtin size catalogs without touching the filesystem.

use clap::Args;

use crate::catalog::{SizeCatalog, LAUNCHER_FILENAME};
use crate::error::Result;
use crate::output::{plural, Printer};

/// Print the builtin size catalogs
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Also show the iOS manifest slot table
    #[arg(long)]
    pub slots: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let android = SizeCatalog::android();
    let ios = SizeCatalog::ios();

    for entry in &android {
        printer.info(
            "android",
            &format!("{}/{} ({}x{})", entry.folder(), LAUNCHER_FILENAME, entry.size, entry.size),
        );
    }

    for entry in &ios {
        printer.info("ios", &format!("{} ({}x{})", entry.filename, entry.size, entry.size));
    }

    if args.slots {
        for slot in SizeCatalog::ios_slots() {
            printer.info(
                "slot",
                &format!(
                    "{} {} {} {}",
                    slot.filename,
                    slot.size,
                    slot.idiom.as_str(),
                    printer.dim(slot.scale)
                ),
            );
        }
    }

    printer.status(
        "Total",
        &format!(
            "{}, {}",
            plural(android.len() + ios.len(), "icon", "icons"),
            plural(SizeCatalog::ios_slots().len(), "manifest slot", "manifest slots")
        ),
    );

    Ok(())
}
