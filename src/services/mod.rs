//! Services - the gallery pipeline stages
//!
//! This module contains the pipeline logic:
//! - `timestamp` - filename timestamp extraction
//! - `grouper` - timestamp clustering into photo series (the core)
//! - `renderer` - group list to grid markup fragment
//! - `page` - full page assembly around the fragments
//! - `builder` - orchestrates scan → group → render per section

pub mod builder;
pub mod grouper;
pub mod page;
pub mod renderer;
pub mod timestamp;

// Re-export commonly used types
pub use builder::GalleryBuilder;
pub use grouper::Grouper;
pub use renderer::VariantPicker;
