//! Gallery build orchestration
//!
//! The builder wires the pipeline for both sections: collect images under
//! the media root, cluster them into groups, render the grid fragment, and
//! finally assemble the full page. It also keeps the run statistics.

use crate::domain::Section;
use crate::infra::config::Config;
use crate::infra::stats::{RunStats, StatsSummary};
use crate::io::scanner::collect_images;
use crate::services::grouper::Grouper;
use crate::services::page::{render_page, PageContext};
use crate::services::renderer::{render_groups, VariantPicker};
use std::path::PathBuf;
use tracing::info;

/// Orchestrates scan → group → render for both gallery sections
pub struct GalleryBuilder {
    /// Application configuration
    config: Config,
    /// Timestamp clustering
    grouper: Grouper,
    /// Per-run counters
    stats: RunStats,
}

impl GalleryBuilder {
    pub fn new(config: Config) -> Self {
        let grouper = Grouper::new(config.threshold_ms(), config.max_items());
        Self { config, grouper, stats: RunStats::new() }
    }

    /// Build the complete page for the configured media roots.
    pub fn build(&mut self) -> String {
        let mut picker = match self.config.variant_seed() {
            Some(seed) => VariantPicker::with_seed(seed),
            None => VariantPicker::new(),
        };

        let posts_root = self.config.posts_dir().to_path_buf();
        let stories_root = self.config.stories_dir().to_path_buf();

        let posts_html = self.build_section(Section::Posts, posts_root, &mut picker);
        let stories_html = self.build_section(Section::Stories, stories_root, &mut picker);

        let ctx = PageContext {
            title: self.config.page_title(),
            heading: self.config.page_heading(),
            stats_line: self.config.stats_line(),
            bio_lines: self.config.bio_lines(),
            profile_image: self.config.profile_image(),
        };

        render_page(&ctx, &posts_html, &stories_html)
    }

    fn build_section(
        &mut self,
        section: Section,
        root: PathBuf,
        picker: &mut VariantPicker,
    ) -> String {
        let files = collect_images(&root);
        let scanned = files.len();

        let groups = self.grouper.group(files);
        self.stats.record_section(section, scanned, &groups);

        info!(
            section = %section,
            root = %root.display(),
            files = %scanned,
            groups = %groups.len(),
            "section_built"
        );

        render_groups(&groups, picker)
    }

    /// End-of-run counters snapshot
    pub fn summary(&self) -> StatsSummary {
        self.stats.report()
    }
}
