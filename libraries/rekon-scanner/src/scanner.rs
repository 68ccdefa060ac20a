//! Recursive expansion of music directories into file paths

use crate::index::SourceIndex;
use crate::{Result, ScanError};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Scanner for every file under a set of directories
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Maximum depth to traverse (None for unlimited)
    max_depth: Option<usize>,

    /// Whether to descend into and return dot-files
    include_hidden: bool,
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether hidden files and directories are scanned
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Scan a directory for files
    ///
    /// # Arguments
    ///
    /// * `root` - Directory path to scan, absolute or relative
    ///
    /// # Returns
    ///
    /// Every regular file found, as `/`-separated paths starting with `root`.
    /// A root that does not exist yields no files.
    pub fn scan_directory(&self, root: &str) -> Result<Vec<String>> {
        if root.trim().is_empty() {
            return Err(ScanError::EmptyRoot);
        }

        let root = normalize_separators(root);
        let root_path = Path::new(&root);

        if !root_path.is_dir() {
            tracing::warn!("Music directory {} does not exist or is not a directory", root);
            return Ok(Vec::new());
        }

        let mut walker = WalkDir::new(root_path).follow_links(self.follow_links);

        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let include_hidden = self.include_hidden;
        let mut files = Vec::new();

        for entry in walker
            .into_iter()
            .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|source| ScanError::Walk {
                root: root.clone(),
                source,
            })?;

            // Skip directories and anything that is not a regular file
            if !entry.path().is_file() {
                continue;
            }

            files.push(display_path(entry.path()));
        }

        tracing::debug!("Found {} files under {}", files.len(), root);
        Ok(files)
    }

    /// Scan multiple directories, in order
    pub fn scan_directories<S: AsRef<str>>(&self, roots: &[S]) -> Result<Vec<String>> {
        let mut all_files = Vec::new();

        for root in roots {
            let mut files = self.scan_directory(root.as_ref())?;
            all_files.append(&mut files);
        }

        Ok(all_files)
    }

    /// Scan `roots` and index the files by Root Name
    pub fn build_index<S: AsRef<str>>(&self, roots: &[S]) -> Result<SourceIndex> {
        let files = self.scan_directories(roots)?;
        let index = SourceIndex::from_paths(files);

        tracing::info!(
            "Indexed {} root names from {} music directories",
            index.len(),
            roots.len()
        );
        Ok(index)
    }
}

/// Replace Windows separators with forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn display_path(path: &Path) -> String {
    let path = normalize_separators(&path.to_string_lossy());
    match path.strip_prefix("./") {
        Some(relative) => relative.to_string(),
        None => path,
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
