//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to batches of releases.

use crate::types::Release;
use anyhow::Result;

/// Core trait for filtering releases.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one filter to be shared by concurrent callers
/// - Filters take ownership of the Vec<Release> and return the kept subset
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a batch of releases.
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - The releases that passed, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, releases: Vec<Release>) -> Result<Vec<Release>>;
}
