//! Filter to keep releases in wanted formats.

use crate::traits::Filter;
use crate::types::Release;
use anyhow::Result;

/// Keeps releases whose format is one of the configured formats.
///
/// ## Algorithm
/// 1. Empty format list: keep everything
/// 2. Otherwise keep a release only if it has a format and that format
///    matches one of the list exactly
pub struct FormatFilter {
    formats: Vec<String>,
}

impl FormatFilter {
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for FormatFilter {
    fn name(&self) -> &str {
        "FormatFilter"
    }

    fn apply(&self, releases: Vec<Release>) -> Result<Vec<Release>> {
        if self.formats.is_empty() {
            return Ok(releases);
        }
        Ok(releases
            .into_iter()
            .filter(|release| match &release.format {
                Some(format) => self.formats.iter().any(|f| f == format),
                None => false, // Unknown format can't satisfy a format list
            })
            .collect())
    }
}
