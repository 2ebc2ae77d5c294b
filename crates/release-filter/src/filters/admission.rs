//! The admission filter: keep a release if it's recent enough or carries an
//! allowlisted tag, and leave a trace line saying why.
//!
//! ## Algorithm
//! Evaluated in order, first match wins:
//! 1. `year >= year_threshold` admits with reason `Year`
//! 2. Scan `allowed_tags` in config order; the first one present on the
//!    release admits with reason `Tag`
//! 3. Otherwise the release is rejected
//!
//! The scan walks the allowlist, not the release's tags, so the reported tag
//! depends only on config order.

use crate::config::FilterConfig;
use crate::decision::{Decision, TraceLine};
use crate::sink::{StdoutSink, TraceSink};
use crate::traits::Filter;
use crate::types::Release;
use anyhow::Result;
use std::sync::Arc;

/// Decides admission for single releases against a fixed configuration.
///
/// Cheap to clone; clones share the same config and sink.
#[derive(Clone)]
pub struct AdmissionFilter {
    config: Arc<FilterConfig>,
    sink: Arc<dyn TraceSink>,
}

impl AdmissionFilter {
    /// Create a filter that traces to `sink`.
    pub fn new(config: Arc<FilterConfig>, sink: Arc<dyn TraceSink>) -> Self {
        Self { config, sink }
    }

    /// Create a filter that traces to standard output.
    pub fn with_stdout(config: Arc<FilterConfig>) -> Self {
        Self::new(config, Arc::new(StdoutSink))
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Pure decision, no trace output.
    pub fn decide(&self, release: &Release) -> Decision {
        if release.year >= self.config.year_threshold {
            return Decision::by_year(release.year);
        }

        self.config
            .allowed_tags
            .iter()
            .find(|tag| release.has_tag(tag))
            .map(Decision::by_tag)
            .unwrap_or_else(Decision::rejected)
    }

    /// Decide, write the trace line, and return the decision.
    pub fn evaluate(&self, release: &Release) -> Decision {
        tracing::debug!(
            "Evaluating release: {} (year: {}, tags: [{}])",
            release.name,
            release.year,
            release.joined_tags()
        );
        let decision = self.decide(release);
        let line = TraceLine {
            decision: &decision,
            release,
            verbose_rejections: self.config.verbose_rejections,
        };
        self.sink.emit(&line.to_string());
        decision
    }

    /// `true` if the release is admitted. Writes one trace line.
    pub fn is_admitted(&self, release: &Release) -> bool {
        self.evaluate(release).admitted
    }
}

impl Filter for AdmissionFilter {
    fn name(&self) -> &str {
        "AdmissionFilter"
    }

    fn apply(&self, releases: Vec<Release>) -> Result<Vec<Release>> {
        Ok(releases
            .into_iter()
            .filter(|release| self.is_admitted(release))
            .collect())
    }
}
