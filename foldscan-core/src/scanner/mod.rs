mod extension;
mod stats;
mod walker;

pub use extension::{NO_EXTENSION_LABEL, file_extension, normalize_extension};
pub use stats::{ExtensionBreakdown, FileBucket, LargestFile, ScanStatistics};
pub use walker::{ScanConfig, Scanner};
