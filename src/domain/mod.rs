//! Domain models - core gallery entities
//!
//! This module contains the canonical data types used throughout the system:
//! - `ImageFile` - an image with its filename timestamp
//! - `Group` - a cluster of temporally-adjacent images (a series when > 1)
//! - `Section` - which gallery tab a media root feeds into

pub mod types;

pub use types::{Group, ImageFile, Section};
