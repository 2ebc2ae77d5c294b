//! Structured admission decisions and their trace-line rendering.

use crate::types::Release;
use serde::Serialize;
use std::fmt;

/// Why a release was admitted or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Reason {
    /// Release year met the threshold.
    Year(i32),
    /// First allowlisted tag (in config order) found on the release.
    Tag(String),
    /// Neither the year nor any tag qualified.
    NoMatch,
}

/// Outcome of evaluating one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub admitted: bool,
    pub reason: Reason,
}

impl Decision {
    pub fn by_year(year: i32) -> Self {
        Self {
            admitted: true,
            reason: Reason::Year(year),
        }
    }

    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            admitted: true,
            reason: Reason::Tag(tag.into()),
        }
    }

    pub fn rejected() -> Self {
        Self {
            admitted: false,
            reason: Reason::NoMatch,
        }
    }
}

/// Human-readable audit line for a decision.
///
/// ```text
/// [+] year=2020 A
/// [+] tag=glitch B
/// [-] C
/// [-] C : 2010 : rock, pop      (verbose rejections)
/// ```
pub struct TraceLine<'a> {
    pub decision: &'a Decision,
    pub release: &'a Release,
    pub verbose_rejections: bool,
}

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.release.name;
        match &self.decision.reason {
            Reason::Year(year) => write!(f, "[+] year={year} {name}"),
            Reason::Tag(tag) => write!(f, "[+] tag={tag} {name}"),
            Reason::NoMatch if self.verbose_rejections => write!(
                f,
                "[-] {name} : {} : {}",
                self.release.year,
                self.release.joined_tags()
            ),
            Reason::NoMatch => write!(f, "[-] {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(decision: &Decision, release: &Release, verbose: bool) -> String {
        TraceLine {
            decision,
            release,
            verbose_rejections: verbose,
        }
        .to_string()
    }

    #[test]
    fn test_admitted_lines() {
        let release = Release::new(2020, "A");
        assert_eq!(line(&Decision::by_year(2020), &release, false), "[+] year=2020 A");

        let release = Release::new(2010, "B").with_tags(["glitch", "rock"]);
        assert_eq!(line(&Decision::by_tag("glitch"), &release, true), "[+] tag=glitch B");
    }

    #[test]
    fn test_rejection_lines() {
        let release = Release::new(2010, "C").with_tags(["rock", "pop"]);

        assert_eq!(line(&Decision::rejected(), &release, false), "[-] C");
        assert_eq!(line(&Decision::rejected(), &release, true), "[-] C : 2010 : rock, pop");
    }

    #[test]
    fn test_verbose_rejection_without_tags() {
        let release = Release::new(1999, "E");
        assert_eq!(line(&Decision::rejected(), &release, true), "[-] E : 1999 : ");
    }

    #[test]
    fn test_reason_serializes_with_kind() {
        let json = serde_json::to_string(&Decision::by_tag("ambient")).unwrap();
        assert_eq!(
            json,
            r#"{"admitted":true,"reason":{"kind":"tag","value":"ambient"}}"#
        );

        let json = serde_json::to_string(&Decision::rejected()).unwrap();
        assert_eq!(json, r#"{"admitted":false,"reason":{"kind":"no_match"}}"#);
    }
}
