//! Configuration loading from TOML files
//!
//! All sections are optional; defaults reproduce the original archive
//! layout (media/posts + media/stories in, output/index.html out).

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,
    #[serde(default = "default_stories_dir")]
    pub stories_dir: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self { posts_dir: default_posts_dir(), stories_dir: default_stories_dir() }
    }
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from("media/posts")
}

fn default_stories_dir() -> PathBuf {
    PathBuf::from("media/stories")
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupingConfig {
    /// Cap on emitted groups per section
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Clustering tolerance against a group's anchor (milliseconds)
    #[serde(default = "default_threshold_ms")]
    pub threshold_ms: u64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self { max_items: default_max_items(), threshold_ms: default_threshold_ms() }
    }
}

fn default_max_items() -> usize {
    30
}

fn default_threshold_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_output_file_name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_output_dir(), file_name: default_output_file_name() }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_output_file_name() -> String {
    "index.html".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
    #[serde(default = "default_page_title")]
    pub title: String,
    #[serde(default = "default_page_heading")]
    pub heading: String,
    #[serde(default = "default_stats_line")]
    pub stats_line: String,
    #[serde(default = "default_bio_lines")]
    pub bio_lines: Vec<String>,
    /// Profile image source, relative to the generated page
    #[serde(default = "default_profile_image")]
    pub profile_image: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            heading: default_page_heading(),
            stats_line: default_stats_line(),
            bio_lines: default_bio_lines(),
            profile_image: default_profile_image(),
        }
    }
}

fn default_page_title() -> String {
    "DOUI CAMERA".to_string()
}

fn default_page_heading() -> String {
    "RHEE DOUI".to_string()
}

fn default_stats_line() -> String {
    "20 POSTS · 217 FOLLOWERS · 153 FOLLOWING".to_string()
}

fn default_bio_lines() -> Vec<String> {
    vec!["This is Only Archiving.".to_string(), "This is not my Portfolio.".to_string()]
}

fn default_profile_image() -> String {
    "../profile.jpg".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RenderConfig {
    /// Fixed seed for the layout-variant RNG (reproducible builds)
    #[serde(default)]
    pub variant_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub grouping: GroupingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub page: PageSection,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    posts_dir: PathBuf,
    stories_dir: PathBuf,
    max_items: usize,
    threshold_ms: u64,
    output_dir: PathBuf,
    output_file_name: String,
    page_title: String,
    page_heading: String,
    stats_line: String,
    bio_lines: Vec<String>,
    profile_image: String,
    variant_seed: Option<u64>,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default(), "default")
    }
}

impl Config {
    fn from_toml(toml_config: TomlConfig, config_file: &str) -> Self {
        Self {
            posts_dir: toml_config.media.posts_dir,
            stories_dir: toml_config.media.stories_dir,
            max_items: toml_config.grouping.max_items,
            threshold_ms: toml_config.grouping.threshold_ms,
            output_dir: toml_config.output.dir,
            output_file_name: toml_config.output.file_name,
            page_title: toml_config.page.title,
            page_heading: toml_config.page.heading,
            stats_line: toml_config.page.stats_line,
            bio_lines: toml_config.page.bio_lines,
            profile_image: toml_config.page.profile_image,
            variant_seed: toml_config.render.variant_seed,
            config_file: config_file.to_string(),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self::from_toml(toml_config, &path.display().to_string()))
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {e:#}. Using defaults.");
                Self::default()
            }
        }
    }

    // Getters for all config fields
    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    pub fn stories_dir(&self) -> &Path {
        &self.stories_dir
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_file_name(&self) -> &str {
        &self.output_file_name
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn page_heading(&self) -> &str {
        &self.page_heading
    }

    pub fn stats_line(&self) -> &str {
        &self.stats_line
    }

    pub fn bio_lines(&self) -> &[String] {
        &self.bio_lines
    }

    pub fn profile_image(&self) -> &str {
        &self.profile_image
    }

    pub fn variant_seed(&self) -> Option<u64> {
        self.variant_seed
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Builder method for tests to point media roots somewhere else
    #[cfg(test)]
    pub fn with_media_dirs(mut self, posts: PathBuf, stories: PathBuf) -> Self {
        self.posts_dir = posts;
        self.stories_dir = stories;
        self
    }

    /// Builder method for tests to set the output location
    #[cfg(test)]
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    /// Builder method for tests to pin the variant seed
    #[cfg(test)]
    pub fn with_variant_seed(mut self, seed: u64) -> Self {
        self.variant_seed = Some(seed);
        self
    }

    /// Builder method for tests to set grouping limits
    #[cfg(test)]
    pub fn with_grouping(mut self, threshold_ms: u64, max_items: usize) -> Self {
        self.threshold_ms = threshold_ms;
        self.max_items = max_items;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.posts_dir(), Path::new("media/posts"));
        assert_eq!(config.stories_dir(), Path::new("media/stories"));
        assert_eq!(config.max_items(), 30);
        assert_eq!(config.threshold_ms(), 5000);
        assert_eq!(config.output_dir(), Path::new("output"));
        assert_eq!(config.output_file_name(), "index.html");
        assert_eq!(config.page_title(), "DOUI CAMERA");
        assert_eq!(config.variant_seed(), None);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[grouping]\nmax_items = 5\nthreshold_ms = 250\n")
            .unwrap();
        temp_file.flush().unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();

        assert_eq!(config.max_items(), 5);
        assert_eq!(config.threshold_ms(), 250);
        assert_eq!(config.posts_dir(), Path::new("media/posts"));
        assert_eq!(config.page_heading(), "RHEE DOUI");
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let config = Config::load_from_path("/nonexistent/gallery.toml");
        assert_eq!(config.max_items(), 30);
        assert_eq!(config.config_file(), "default");
    }

    #[test]
    fn test_parse_error_is_contextualized() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[grouping\nmax_items = ").unwrap();
        temp_file.flush().unwrap();

        let err = Config::from_file(temp_file.path()).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config file"));
    }
}
