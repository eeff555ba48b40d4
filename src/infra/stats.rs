//! Run statistics
//!
//! Per-section counters for what a run scanned and emitted, reported once
//! after the page is written. Plain fields: the pipeline is single-threaded
//! and one-shot, so nothing here needs synchronization.

use crate::domain::{Group, Section};
use tracing::info;

#[derive(Debug, Default, Clone, Copy)]
struct SectionCounts {
    files_scanned: u64,
    files_grouped: u64,
    groups: u64,
    series: u64,
}

impl SectionCounts {
    fn record(&mut self, files_scanned: usize, groups: &[Group]) {
        self.files_scanned = files_scanned as u64;
        self.files_grouped = groups.iter().map(|g| g.len() as u64).sum();
        self.groups = groups.len() as u64;
        self.series = groups.iter().filter(|g| g.is_series()).count() as u64;
    }

    /// Files that carried no filename timestamp (or fell past the group cap)
    fn dropped(&self) -> u64 {
        self.files_scanned.saturating_sub(self.files_grouped)
    }
}

/// Collects per-run counters across both sections
#[derive(Debug, Default)]
pub struct RunStats {
    posts: SectionCounts,
    stories: SectionCounts,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record scan/group results for one section
    pub fn record_section(&mut self, section: Section, files_scanned: usize, groups: &[Group]) {
        match section {
            Section::Posts => self.posts.record(files_scanned, groups),
            Section::Stories => self.stories.record(files_scanned, groups),
        }
    }

    /// Snapshot for the end-of-run report
    pub fn report(&self) -> StatsSummary {
        StatsSummary {
            posts_files: self.posts.files_scanned,
            posts_groups: self.posts.groups,
            posts_series: self.posts.series,
            posts_dropped: self.posts.dropped(),
            stories_files: self.stories.files_scanned,
            stories_groups: self.stories.groups,
            stories_series: self.stories.series,
            stories_dropped: self.stories.dropped(),
        }
    }
}

/// End-of-run summary snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSummary {
    pub posts_files: u64,
    pub posts_groups: u64,
    pub posts_series: u64,
    pub posts_dropped: u64,
    pub stories_files: u64,
    pub stories_groups: u64,
    pub stories_series: u64,
    pub stories_dropped: u64,
}

impl StatsSummary {
    pub fn log(&self) {
        info!(
            posts_files = %self.posts_files,
            posts_groups = %self.posts_groups,
            posts_series = %self.posts_series,
            posts_dropped = %self.posts_dropped,
            stories_files = %self.stories_files,
            stories_groups = %self.stories_groups,
            stories_series = %self.stories_series,
            stories_dropped = %self.stories_dropped,
            "run_summary"
        );
    }
}
