/// Bucket label for files whose name carries no extension
pub const NO_EXTENSION_LABEL: &str = "(no extension)";

/// Normalize a user-supplied extension filter.
///
/// Lowercases and ensures a leading dot, so `txt`, `.txt` and `.TXT` are the
/// same filter. Only empty input means no filter; a lone `.` selects names
/// ending in a dot.
pub fn normalize_extension(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let lower = raw.to_lowercase();
    if lower.starts_with('.') {
        Some(lower)
    } else {
        Some(format!(".{}", lower))
    }
}

/// Extension of a file name, lowercased and including the leading dot.
///
/// Dots at the very start of the name do not count as a separator, so
/// `.bashrc` has no extension while `archive.tar.gz` yields `.gz`.
pub fn file_extension(name: &str) -> Option<String> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let rest = &name[stem_start..];

    rest.rfind('.').map(|idx| rest[idx..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("txt").as_deref(), Some(".txt"));
        assert_eq!(normalize_extension(".txt").as_deref(), Some(".txt"));
        assert_eq!(normalize_extension(".TXT").as_deref(), Some(".txt"));
        assert_eq!(normalize_extension("Md").as_deref(), Some(".md"));
    }

    #[test]
    fn test_normalize_empty_is_no_filter() {
        assert_eq!(normalize_extension(""), None);
    }

    #[test]
    fn test_normalize_keeps_input_verbatim() {
        assert_eq!(normalize_extension(".").as_deref(), Some("."));
        assert_eq!(normalize_extension(" txt").as_deref(), Some(". txt"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("notes.txt").as_deref(), Some(".txt"));
        assert_eq!(file_extension("PHOTO.JPG").as_deref(), Some(".jpg"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(file_extension("Makefile"), None);
    }

    #[test]
    fn test_file_extension_dotfiles() {
        assert_eq!(file_extension(".bashrc"), None);
        assert_eq!(file_extension("..hidden"), None);
        assert_eq!(file_extension(".config.toml").as_deref(), Some(".toml"));
        assert_eq!(file_extension("trailing.").as_deref(), Some("."));
    }
}
