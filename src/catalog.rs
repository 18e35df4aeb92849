//! Icon size catalogs for Android and iOS.
//!
//! Declarative, ordered, read-only data initialized once at startup.
//! Catalog order is part of the external contract: it drives both the
//! order files are written in and the order of manifest entries, so the
//! catalogs are explicit sequences, never unordered maps.

/// Fixed output filename for every Android density folder.
pub const LAUNCHER_FILENAME: &str = "ic_launcher.png";

/// Device-class tag attached to an iOS manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Iphone,
    Ipad,
    /// App Store marketing icon.
    IosMarketing,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

/// One Android launcher icon: a density folder and a square pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidEntry {
    /// Density bucket name ("mdpi", "hdpi", ...).
    pub density: &'static str,
    /// Edge length in pixels.
    pub size: u32,
}

impl AndroidEntry {
    /// Resource folder this entry is written to, e.g. "mipmap-xhdpi".
    pub fn folder(&self) -> String {
        format!("mipmap-{}", self.density)
    }
}

/// One iOS asset-catalog icon: a filename and a square pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosEntry {
    pub filename: &'static str,
    /// Edge length in pixels (point size x scale).
    pub size: u32,
}

/// One slot in the iOS `Contents.json` manifest.
///
/// Several slots may share a filename: the same rendered file serves
/// multiple (idiom, scale) combinations, so the mapping is declared here
/// explicitly rather than inferred from filename strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestSlot {
    /// Point size string, e.g. "20x20" or "83.5x83.5".
    pub size: &'static str,
    pub idiom: Idiom,
    pub filename: &'static str,
    /// Scale string, e.g. "2x".
    pub scale: &'static str,
}

/// The builtin size catalogs.
pub struct SizeCatalog;

impl SizeCatalog {
    /// Android launcher icon sizes, in density order.
    pub fn android() -> Vec<AndroidEntry> {
        vec![
            AndroidEntry { density: "mdpi", size: 48 },
            AndroidEntry { density: "hdpi", size: 72 },
            AndroidEntry { density: "xhdpi", size: 96 },
            AndroidEntry { density: "xxhdpi", size: 144 },
            AndroidEntry { density: "xxxhdpi", size: 192 },
        ]
    }

    /// iOS app icon files, in declared order.
    pub fn ios() -> Vec<IosEntry> {
        vec![
            IosEntry { filename: "Icon-20@2x.png", size: 40 },
            IosEntry { filename: "Icon-20@3x.png", size: 60 },
            IosEntry { filename: "Icon-29@2x.png", size: 58 },
            IosEntry { filename: "Icon-29@3x.png", size: 87 },
            IosEntry { filename: "Icon-40@2x.png", size: 80 },
            IosEntry { filename: "Icon-40@3x.png", size: 120 },
            IosEntry { filename: "Icon-60@2x.png", size: 120 },
            IosEntry { filename: "Icon-60@3x.png", size: 180 },
            IosEntry { filename: "Icon-76.png", size: 76 },
            IosEntry { filename: "Icon-76@2x.png", size: 152 },
            IosEntry { filename: "Icon-83.5@2x.png", size: 167 },
            IosEntry { filename: "Icon-1024.png", size: 1024 },
        ]
    }

    /// iOS manifest slots, in the order they appear in `Contents.json`.
    pub fn ios_slots() -> Vec<ManifestSlot> {
        use Idiom::*;
        vec![
            ManifestSlot { size: "20x20", idiom: Iphone, filename: "Icon-20@2x.png", scale: "2x" },
            ManifestSlot { size: "20x20", idiom: Iphone, filename: "Icon-20@3x.png", scale: "3x" },
            ManifestSlot { size: "29x29", idiom: Iphone, filename: "Icon-29@2x.png", scale: "2x" },
            ManifestSlot { size: "29x29", idiom: Iphone, filename: "Icon-29@3x.png", scale: "3x" },
            ManifestSlot { size: "40x40", idiom: Iphone, filename: "Icon-40@2x.png", scale: "2x" },
            ManifestSlot { size: "40x40", idiom: Iphone, filename: "Icon-40@3x.png", scale: "3x" },
            ManifestSlot { size: "60x60", idiom: Iphone, filename: "Icon-60@2x.png", scale: "2x" },
            ManifestSlot { size: "60x60", idiom: Iphone, filename: "Icon-60@3x.png", scale: "3x" },
            ManifestSlot { size: "20x20", idiom: Ipad, filename: "Icon-20@2x.png", scale: "2x" },
            ManifestSlot { size: "29x29", idiom: Ipad, filename: "Icon-29@2x.png", scale: "2x" },
            ManifestSlot { size: "40x40", idiom: Ipad, filename: "Icon-40@2x.png", scale: "2x" },
            ManifestSlot { size: "76x76", idiom: Ipad, filename: "Icon-76.png", scale: "1x" },
            ManifestSlot { size: "76x76", idiom: Ipad, filename: "Icon-76@2x.png", scale: "2x" },
            ManifestSlot { size: "83.5x83.5", idiom: Ipad, filename: "Icon-83.5@2x.png", scale: "2x" },
            ManifestSlot { size: "1024x1024", idiom: IosMarketing, filename: "Icon-1024.png", scale: "1x" },
        ]
    }

    /// Look up the rendered pixel size of an iOS filename.
    pub fn ios_size_of(filename: &str) -> Option<u32> {
        Self::ios().into_iter().find(|e| e.filename == filename).map(|e| e.size)
    }
}
