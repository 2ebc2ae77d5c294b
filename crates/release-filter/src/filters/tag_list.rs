//! Filter to keep releases carrying at least one wanted tag.
//!
//! Unlike the admission filter this one has no year shortcut and no
//! trace output; it's a plain pre-selection step.

use crate::traits::Filter;
use crate::types::Release;
use anyhow::Result;

/// Keeps releases that have any of the configured tags.
///
/// An empty tag list disables the filter.
pub struct TagListFilter {
    tags: Vec<String>,
}

impl TagListFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for TagListFilter {
    fn name(&self) -> &str {
        "TagListFilter"
    }

    fn apply(&self, releases: Vec<Release>) -> Result<Vec<Release>> {
        if self.tags.is_empty() {
            return Ok(releases);
        }
        Ok(releases
            .into_iter()
            .filter(|release| self.tags.iter().any(|tag| release.has_tag(tag)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list_filter() {
        let releases = vec![
            Release::new(2010, "A").with_tags(["rock", "pop"]),
            Release::new(2010, "B").with_tags(["idm"]),
            Release::new(2020, "C").with_tags(["jazz", "idm"]),
            Release::new(2020, "D"),
        ];

        let filter = TagListFilter::new(["idm", "techno"]);
        let filtered = filter.apply(releases).unwrap();

        let names: Vec<_> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_empty_tag_list_keeps_everything() {
        let releases = vec![Release::new(2010, "A"), Release::new(2020, "B")];

        let filtered = TagListFilter::new(Vec::<String>::new()).apply(releases).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
