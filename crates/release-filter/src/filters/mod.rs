//! Filter implementations for the release pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod admission;
pub mod format;
pub mod tag_list;
pub mod year_list;

// Re-export for convenience
pub use admission::AdmissionFilter;
pub use format::FormatFilter;
pub use tag_list::TagListFilter;
pub use year_list::YearListFilter;
