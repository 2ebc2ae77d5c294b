//! Filter configuration.
//!
//! A `FilterConfig` is built once (from defaults, a JSON file, or builder
//! calls) and then shared read-only, usually behind an `Arc`.

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Releases from this year on are admitted regardless of tags.
pub const DEFAULT_YEAR_THRESHOLD: i32 = 2016;

/// Tags that admit an older release, in scan order.
pub const DEFAULT_ALLOWED_TAGS: [&str; 5] = ["ambient", "vaporwave", "glitch", "synthpop", "synthwave"];

/// Configuration for an `AdmissionFilter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Allowlisted tags. The enumeration order here decides which tag is
    /// reported when a release carries several of them.
    pub allowed_tags: Vec<String>,
    pub year_threshold: i32,
    /// Include year and tags in rejection trace lines.
    pub verbose_rejections: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
            year_threshold: DEFAULT_YEAR_THRESHOLD,
            verbose_rejections: false,
        }
    }
}

impl FilterConfig {
    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| FilterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FilterConfig =
            serde_json::from_str(&raw).map_err(|source| FilterError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validated()
    }

    /// Replace the allowlist, keeping the first occurrence of duplicates.
    pub fn with_allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tags = tags.into_iter().map(Into::into).collect();
        self.dedup_allowed_tags();
        self
    }

    pub fn with_year_threshold(mut self, year_threshold: i32) -> Self {
        self.year_threshold = year_threshold;
        self
    }

    pub fn with_verbose_rejections(mut self, verbose: bool) -> Self {
        self.verbose_rejections = verbose;
        self
    }

    /// Check the config and normalise the allowlist.
    ///
    /// Empty or whitespace-only tags can never match a real tag and are
    /// treated as a configuration mistake.
    pub fn validated(mut self) -> Result<Self> {
        if let Some(pos) = self.allowed_tags.iter().position(|t| t.trim().is_empty()) {
            return Err(FilterError::InvalidConfig(format!(
                "allowed_tags[{pos}] is empty"
            )));
        }
        self.dedup_allowed_tags();
        Ok(self)
    }

    fn dedup_allowed_tags(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.allowed_tags.retain(|tag| seen.insert(tag.clone()));
    }
}
