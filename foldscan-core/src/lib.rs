pub mod error;
pub mod paths;
pub mod report;
pub mod scanner;
pub mod size;

pub use error::{Result, ScanError};
pub use paths::absolute_path;
pub use report::{DEFAULT_OUTPUT_PATH, ReportConfig, render, render_at, write_report};
pub use scanner::{
    ExtensionBreakdown, FileBucket, LargestFile, NO_EXTENSION_LABEL, ScanConfig, ScanStatistics,
    Scanner, file_extension, normalize_extension,
};
pub use size::format_size;
