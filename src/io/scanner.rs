//! Recursive image collection
//!
//! Walks a media root and returns every image file under it. No ordering
//! guarantee; the grouper imposes its own.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Recognized image filename suffixes (exact case, as named on disk)
const IMAGE_SUFFIXES: [&str; 2] = [".jpg", ".png"];

/// Collect image files under `root`, recursively.
///
/// A missing root yields an empty list, not an error: an archive section
/// may simply not exist yet.
pub fn collect_images(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        debug!(root = %root.display(), "media_root_missing");
        return Vec::new();
    }

    let mut results = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if IMAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            results.push(path.to_path_buf());
        }
    }

    debug!(root = %root.display(), files = %results.len(), "media_root_scanned");
    results
}
