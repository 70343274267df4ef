use std::io;
use std::path::{Component, Path, PathBuf};

/// Make a path absolute without touching the filesystem.
///
/// Symlinks are kept as given; `.` components are dropped and `..` removes
/// the preceding component, never climbing above the root.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
