//! Core domain types for release filtering.
//!
//! A `Release` is supplied by whatever drives the pipeline. Filters only
//! borrow it; nothing in this crate mutates a release.

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A music release as seen by the filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub year: i32,
    pub name: String,
    /// Descriptive tags in the order the source listed them.
    ///
    /// Order is only used for display; matching is a membership test.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Release format (e.g. "FLAC"), if the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Release {
    pub fn new(year: i32, name: impl Into<String>) -> Self {
        Self {
            year,
            name: name.into(),
            tags: Vec::new(),
            format: None,
        }
    }

    /// Replace the tag list (builder pattern).
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Exact-match membership test on the release's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags joined with ", ", in the release's own order.
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }

    /// Build a release from a loosely typed JSON object.
    ///
    /// Both `year` and `Year` style keys are accepted. Missing or `null`
    /// tags are treated as an empty list; anything else that doesn't fit
    /// the shape is a `MalformedRecord` error.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| FilterError::malformed("record", "is not an object"))?;

        let year = match lookup(obj, "year") {
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(|y| i32::try_from(y).ok())
                .ok_or_else(|| FilterError::malformed("year", format!("{n} is not a valid year")))?,
            Some(other) => {
                return Err(FilterError::malformed(
                    "year",
                    format!("expected an integer, found {}", kind(other)),
                ));
            }
            None => return Err(FilterError::malformed("year", "is missing")),
        };

        let name = match lookup(obj, "name") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(FilterError::malformed(
                    "name",
                    format!("expected a string, found {}", kind(other)),
                ));
            }
            None => return Err(FilterError::malformed("name", "is missing")),
        };

        let tags = match lookup(obj, "tags") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        FilterError::malformed(
                            "tags",
                            format!("expected strings, found {}", kind(item)),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(FilterError::malformed(
                    "tags",
                    format!("expected an array, found {}", kind(other)),
                ));
            }
        };

        let format = match lookup(obj, "format") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(FilterError::malformed(
                    "format",
                    format!("expected a string, found {}", kind(other)),
                ));
            }
        };

        Ok(Self {
            year,
            name,
            tags,
            format,
        })
    }
}

/// Look up `key`, falling back to its capitalised form (`Year`, `Tags`, ...).
fn lookup<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).or_else(|| {
        let mut chars = key.chars();
        let capitalised: String = chars
            .next()
            .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
            .unwrap_or_default();
        obj.get(&capitalised)
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
