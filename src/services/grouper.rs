//! Timestamp clustering for photo series
//!
//! Images shot within a few seconds of each other belong to one visual
//! unit (a multi-photo post). Clustering is anchor-relative: a candidate
//! joins the first group whose anchor (first-inserted member) is within
//! the threshold, never the group's most recently added member. This is
//! the compatibility-relevant policy; do not rewrite it as chain-relative
//! clustering.

use crate::domain::{Group, ImageFile};
use crate::services::timestamp::extract_timestamp;
use std::path::PathBuf;
use tracing::debug;

/// Clustering tolerance against a group's anchor (milliseconds)
pub const DEFAULT_THRESHOLD_MS: u64 = 5000;
/// Cap on emitted groups per section
pub const DEFAULT_MAX_ITEMS: usize = 30;

/// Clusters timestamp-named images into ordered groups
pub struct Grouper {
    threshold_ms: u64,
    max_items: usize,
}

impl Grouper {
    pub fn new(threshold_ms: u64, max_items: usize) -> Self {
        Self { threshold_ms, max_items }
    }

    /// Cluster candidate paths into groups, most recent first.
    ///
    /// Paths without a filename timestamp are dropped. Survivors are sorted
    /// by timestamp descending (stable, so equal timestamps keep their
    /// input relative order) and each file joins the earliest-created group
    /// whose anchor is within `threshold_ms`, or opens a new group at the
    /// end of the list. The result is truncated to `max_items` groups.
    pub fn group(&self, paths: Vec<PathBuf>) -> Vec<Group> {
        let mut files: Vec<ImageFile> = paths
            .into_iter()
            .filter_map(|path| extract_timestamp(&path).map(|ts| ImageFile::new(path, ts)))
            .collect();

        files.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));

        let mut groups: Vec<Group> = Vec::new();

        for file in files {
            // First match wins, checked in group creation order
            let slot = groups
                .iter()
                .position(|g| g.anchor().timestamp_ms.abs_diff(file.timestamp_ms) <= self.threshold_ms);

            match slot {
                Some(idx) => {
                    let group = &mut groups[idx];
                    debug!(
                        anchor_ts = %group.anchor().timestamp_ms,
                        file_ts = %file.timestamp_ms,
                        members = %(group.len() + 1),
                        "joined_group"
                    );
                    group.push(file);
                }
                None => {
                    debug!(anchor_ts = %file.timestamp_ms, "group_opened");
                    groups.push(Group::new(file));
                }
            }
        }

        if groups.len() > self.max_items {
            debug!(
                dropped = %(groups.len() - self.max_items),
                max_items = %self.max_items,
                "groups_truncated"
            );
            groups.truncate(self.max_items);
        }

        groups
    }
}

impl Default for Grouper {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_MS, DEFAULT_MAX_ITEMS)
    }
}
