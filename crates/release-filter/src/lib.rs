//! Admission filtering for music releases.
//!
//! This crate provides:
//! - `AdmissionFilter`, which keeps a release when it is recent enough or
//!   carries an allowlisted genre tag, and writes a trace line per decision
//! - `TraceSink` implementations for where those lines go
//! - The `Filter` trait, a few pre-selection filters and `FilterPipeline`
//!   for chaining them
//!
//! ## Example Usage
//! ```ignore
//! use release_filter::{AdmissionFilter, FilterConfig, Release};
//! use std::sync::Arc;
//!
//! let filter = AdmissionFilter::with_stdout(Arc::new(FilterConfig::default()));
//!
//! let release = Release::new(2010, "B").with_tags(["glitch", "rock"]);
//! assert!(filter.is_admitted(&release)); // prints "[+] tag=glitch B"
//! ```

pub mod config;
pub mod decision;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod sink;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::{DEFAULT_ALLOWED_TAGS, DEFAULT_YEAR_THRESHOLD, FilterConfig};
pub use decision::{Decision, Reason, TraceLine};
pub use error::{FilterError, Result};
pub use filter_pipeline::FilterPipeline;
pub use filters::AdmissionFilter;
pub use sink::{MemorySink, NullSink, StdoutSink, TraceSink, TracingSink};
pub use traits::Filter;
pub use types::Release;
