//! Filter to keep releases from an exact set of years.

use crate::traits::Filter;
use crate::types::Release;
use anyhow::Result;
use std::collections::HashSet;

/// Keeps releases whose year is one of the configured years.
///
/// An empty year list disables the filter.
pub struct YearListFilter {
    years: HashSet<i32>,
}

impl YearListFilter {
    pub fn new(years: impl IntoIterator<Item = i32>) -> Self {
        Self {
            years: years.into_iter().collect(),
        }
    }
}

impl Filter for YearListFilter {
    fn name(&self) -> &str {
        "YearListFilter"
    }

    fn apply(&self, releases: Vec<Release>) -> Result<Vec<Release>> {
        if self.years.is_empty() {
            return Ok(releases);
        }
        Ok(releases
            .into_iter()
            .filter(|release| self.years.contains(&release.year))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_list_filter() {
        let releases = vec![
            Release::new(2010, "A"),
            Release::new(2016, "B"),
            Release::new(2017, "C"),
            Release::new(2010, "D"),
        ];

        let filter = YearListFilter::new([2010, 2017]);
        let filtered = filter.apply(releases).unwrap();

        let names: Vec<_> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_empty_year_list_keeps_everything() {
        let releases = vec![Release::new(1999, "A"), Release::new(2020, "B")];

        let filtered = YearListFilter::new(Vec::new()).apply(releases).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
