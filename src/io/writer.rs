//! Page output - writes the generated document to disk
//!
//! The output directory is created on demand; the page file is replaced
//! wholesale on every run.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writer for the generated gallery page
pub struct PageWriter {
    output_dir: PathBuf,
    file_name: String,
}

impl PageWriter {
    pub fn new(output_dir: &Path, file_name: &str) -> Self {
        debug!(output_dir = %output_dir.display(), file_name = %file_name, "writer_initialized");
        Self { output_dir: output_dir.to_path_buf(), file_name: file_name.to_string() }
    }

    /// Write the page, creating the output directory if absent.
    /// Returns the path of the written file.
    pub fn write(&self, html: &str) -> anyhow::Result<PathBuf> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).with_context(|| {
                format!("Failed to create output directory {}", self.output_dir.display())
            })?;
        }

        let path = self.output_dir.join(&self.file_name);
        fs::write(&path, html)
            .with_context(|| format!("Failed to write page to {}", path.display()))?;

        info!(path = %path.display(), bytes = %html.len(), "page_written");
        Ok(path)
    }
}
