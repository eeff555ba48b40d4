//! Shared types for the gallery pipeline

use smallvec::{smallvec, SmallVec};
use std::path::PathBuf;

/// An image file that carries a parseable filename timestamp.
///
/// Files whose names do not start with a digit run never become
/// `ImageFile`s, so everything downstream of the extractor can rely on
/// `timestamp_ms` being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    /// Filename timestamp in epoch milliseconds
    pub timestamp_ms: u64,
}

impl ImageFile {
    #[inline]
    pub fn new(path: PathBuf, timestamp_ms: u64) -> Self {
        Self { path, timestamp_ms }
    }
}

/// A cluster of temporally-adjacent images.
///
/// The first member is the anchor: membership is decided against the
/// anchor's timestamp only, so a group's total span may exceed the
/// clustering threshold even though every member is within it of the
/// anchor. Non-empty by construction.
#[derive(Debug, Clone)]
pub struct Group {
    members: SmallVec<[ImageFile; 2]>,
}

impl Group {
    /// Open a new group anchored on `file`.
    pub fn new(file: ImageFile) -> Self {
        Self { members: smallvec![file] }
    }

    /// The anchor (first-inserted) member.
    #[inline]
    pub fn anchor(&self) -> &ImageFile {
        &self.members[0]
    }

    /// Append a member. Callers are responsible for the threshold check.
    pub fn push(&mut self, file: ImageFile) {
        self.members.push(file);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// A group with more than one member renders as a series.
    #[inline]
    pub fn is_series(&self) -> bool {
        self.members.len() > 1
    }

    pub fn members(&self) -> &[ImageFile] {
        &self.members
    }
}

/// Gallery section a media root feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Posts,
    Stories,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Posts => "posts",
            Section::Stories => "stories",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
