use std::collections::HashMap;
use std::path::PathBuf;

/// Aggregated count and size for one extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileBucket {
    pub count: u64,
    pub size: u64,
}

impl FileBucket {
    pub fn add(&mut self, size: u64) {
        self.count += 1;
        self.size += size;
    }
}

/// Per-extension buckets, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionBreakdown {
    entries: Vec<(String, FileBucket)>,
    index: HashMap<String, usize>,
}

impl ExtensionBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for an extension, inserting a zeroed one on first sight
    pub fn upsert(&mut self, extension: &str) -> &mut FileBucket {
        let idx = match self.index.get(extension) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries
                    .push((extension.to_string(), FileBucket::default()));
                self.index.insert(extension.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, extension: &str) -> Option<&FileBucket> {
        self.index.get(extension).map(|&idx| &self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileBucket)> {
        self.entries.iter().map(|(ext, bucket)| (ext.as_str(), bucket))
    }

    /// Buckets sorted by total size descending; ties keep first-seen order
    pub fn sorted_by_size(&self) -> Vec<(&str, &FileBucket)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.size.cmp(&a.1.size));
        sorted
    }

    pub fn total_files(&self) -> u64 {
        self.entries.iter().map(|(_, b)| b.count).sum()
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|(_, b)| b.size).sum()
    }
}

/// The biggest file seen during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargestFile {
    pub name: String,
    pub size: u64,
}

/// Result of scanning one directory level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Absolute path of the scanned directory
    pub folder: PathBuf,
    /// Normalized filter (lowercase, leading dot), if one was active
    pub extension_filter: Option<String>,
    pub total_files: u64,
    pub total_size: u64,
    /// None iff no file matched
    pub largest_file: Option<LargestFile>,
    pub file_types: ExtensionBreakdown,
    /// Entries skipped because their metadata could not be read
    pub skipped_entries: u64,
}

impl ScanStatistics {
    pub fn new(folder: PathBuf, extension_filter: Option<String>) -> Self {
        Self {
            folder,
            extension_filter,
            total_files: 0,
            total_size: 0,
            largest_file: None,
            file_types: ExtensionBreakdown::new(),
            skipped_entries: 0,
        }
    }

    /// Account for one matched file. The largest file only changes on a
    /// strictly greater size, so the first file seen wins a tie.
    pub fn record_file(&mut self, name: &str, bucket: &str, size: u64) {
        self.total_files += 1;
        self.total_size += size;

        let is_larger = match &self.largest_file {
            Some(largest) => size > largest.size,
            None => true,
        };
        if is_larger {
            self.largest_file = Some(LargestFile {
                name: name.to_string(),
                size,
            });
        }

        self.file_types.upsert(bucket).add(size);
    }

    /// Verify the totals agree with the breakdown and the largest file.
    ///
    /// Returns a description of the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.total_files != self.file_types.total_files() {
            return Err(format!(
                "total_files {} != breakdown count {}",
                self.total_files,
                self.file_types.total_files()
            ));
        }
        if self.total_size != self.file_types.total_size() {
            return Err(format!(
                "total_size {} != breakdown size {}",
                self.total_size,
                self.file_types.total_size()
            ));
        }
        if self.largest_file.is_none() != (self.total_files == 0) {
            return Err("largest_file must be absent exactly when no files matched".to_string());
        }
        if let Some(filter) = &self.extension_filter
            && self.file_types.iter().any(|(ext, _)| ext != filter)
        {
            return Err(format!("breakdown has keys other than filter {}", filter));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_initializes_zero_bucket() {
        let mut breakdown = ExtensionBreakdown::new();
        assert!(breakdown.is_empty());

        let bucket = breakdown.upsert(".txt");
        assert_eq!(*bucket, FileBucket::default());
        bucket.add(10);
        breakdown.upsert(".txt").add(5);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(
            breakdown.get(".txt"),
            Some(&FileBucket { count: 2, size: 15 })
        );
    }

    #[test]
    fn test_sorted_by_size() {
        let mut breakdown = ExtensionBreakdown::new();
        breakdown.upsert(".a").add(300);
        breakdown.upsert(".b").add(100);
        breakdown.upsert(".c").add(200);

        let order: Vec<&str> = breakdown
            .sorted_by_size()
            .into_iter()
            .map(|(ext, _)| ext)
            .collect();
        assert_eq!(order, vec![".a", ".c", ".b"]);
    }

    #[test]
    fn test_sorted_by_size_ties_keep_first_seen() {
        let mut breakdown = ExtensionBreakdown::new();
        breakdown.upsert(".z").add(50);
        breakdown.upsert(".y").add(80);
        breakdown.upsert(".x").add(50);

        let order: Vec<&str> = breakdown
            .sorted_by_size()
            .into_iter()
            .map(|(ext, _)| ext)
            .collect();
        assert_eq!(order, vec![".y", ".z", ".x"]);
    }

    #[test]
    fn test_record_file_largest_tie_first_wins() {
        let mut stats = ScanStatistics::new(PathBuf::from("/tmp"), None);
        stats.record_file("first.bin", ".bin", 100);
        stats.record_file("second.bin", ".bin", 100);
        stats.record_file("small.txt", ".txt", 1);

        let largest = stats.largest_file.as_ref().unwrap();
        assert_eq!(largest.name, "first.bin");
        assert_eq!(largest.size, 100);
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_size, 201);
        assert!(stats.check_invariants().is_ok());
    }

    #[test]
    fn test_zero_byte_file_is_largest_when_alone() {
        let mut stats = ScanStatistics::new(PathBuf::from("/tmp"), None);
        stats.record_file("empty", "(no extension)", 0);

        assert_eq!(stats.largest_file.as_ref().unwrap().name, "empty");
        assert!(stats.check_invariants().is_ok());
    }

    #[test]
    fn test_check_invariants_detects_mismatch() {
        let mut stats = ScanStatistics::new(PathBuf::from("/tmp"), Some(".txt".to_string()));
        assert!(stats.check_invariants().is_ok());

        stats.record_file("a.md", ".md", 3);
        assert!(stats.check_invariants().is_err());

        let mut stats = ScanStatistics::new(PathBuf::from("/tmp"), None);
        stats.total_files = 1;
        assert!(stats.check_invariants().is_err());
    }
}
