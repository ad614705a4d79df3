//! Rendering intervals back to text
//!
//! The canonical text form is produced by [`serialize_all`]: each interval as a bare number
//! or `start-end`, joined with commas. Text serialization cannot fail.
//!
//! [`render`] adds the structured formats used by tooling. `json` and `yaml` write the
//! intervals as a list of `{start, end}` objects, `list` writes every enumerated integer.

use super::error::SerializeError;
use super::flatten::flatten_iter;
use super::interval::Interval;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `5` for a single value, `1-100` for a range
pub fn serialize_one(interval: Interval) -> String {
    interval.to_string()
}

/// Comma-joined [`serialize_one`] of each interval, in order. Empty input gives `""`.
pub fn serialize_all(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(|interval| serialize_one(*interval))
        .collect::<Vec<_>>()
        .join(",")
}

/// Output formats for a sequence of intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Canonical range string, e.g. `1-3,5`
    #[default]
    Text,
    /// Every integer, e.g. `1,2,3,5`
    List,
    Json,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Text, Format::List, Format::Json, Format::Yaml];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::List => "list",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Format::ALL.iter().map(Format::name).collect();
                format!("Unknown format '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Knobs for [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Separator between integers in [`Format::List`]
    pub list_separator: String,
    /// Pretty-print [`Format::Json`]
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_separator: ",".to_string(),
            pretty: true,
        }
    }
}

/// Renders `intervals` in the requested format
pub fn render(
    intervals: &[Interval],
    format: Format,
    options: &RenderOptions,
) -> Result<String, SerializeError> {
    let output = match format {
        Format::Text => serialize_all(intervals),
        Format::List => flatten_iter(intervals)
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(&options.list_separator),
        Format::Json if options.pretty => serde_json::to_string_pretty(intervals)?,
        Format::Json => serde_json::to_string(intervals)?,
        Format::Yaml => serde_yaml::to_string(intervals)?,
    };
    Ok(output)
}
