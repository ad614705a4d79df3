//! CLI-specific commands
//!
//! Each subcommand is a small function from its input to the text that gets printed.
//! Errors come back as messages; `main` prints them and sets the exit status.

use rangelist_config::RangelistConfig;
use rangelist_parser::range::{
    compress, flatten_iter, parse_to_intervals, render, tokenize_with_spans, CompressExt, Format,
    Interval,
};
use serde::Serializer as _;
use std::fmt::Display;
use std::io::Write;

/// `expand`: every integer named by `text`, written to `out` as it is produced
///
/// `text` and `list` join the values with `expand.separator`; `json` and `yaml` write an
/// integer array. Nothing is collected first, so a huge range only costs output.
pub fn expand<W: Write>(text: &str, config: &RangelistConfig, mut out: W) -> Result<(), String> {
    let intervals = parse_to_intervals(text).map_err(|e| e.to_string())?;
    let values = flatten_iter(&intervals);

    match config.output.format {
        Format::Text | Format::List => {
            let separator = config.expand.separator.as_bytes();
            for (i, value) in values.enumerate() {
                if i > 0 {
                    out.write_all(separator).map_err(write_error)?;
                }
                write!(out, "{}", value).map_err(write_error)?;
            }
            writeln!(out).map_err(write_error)?;
        }
        Format::Json if config.output.pretty => {
            let mut ser = serde_json::Serializer::pretty(&mut out);
            (&mut ser).collect_seq(values).map_err(write_error)?;
            writeln!(out).map_err(write_error)?;
        }
        Format::Json => {
            let mut ser = serde_json::Serializer::new(&mut out);
            (&mut ser).collect_seq(values).map_err(write_error)?;
            writeln!(out).map_err(write_error)?;
        }
        Format::Yaml => {
            // serde_yaml ends the document with its own newline
            let mut ser = serde_yaml::Serializer::new(&mut out);
            (&mut ser).collect_seq(values).map_err(write_error)?;
        }
    }
    out.flush().map_err(write_error)
}

fn write_error(e: impl Display) -> String {
    format!("Failed to write output: {}", e)
}

/// `intervals`: the intervals of `text`, as written
pub fn intervals(text: &str, config: &RangelistConfig) -> Result<String, String> {
    let intervals = parse_to_intervals(text).map_err(|e| e.to_string())?;
    render_intervals(&intervals, config)
}

/// `compress`: ascending integers to maximal runs
pub fn compress_values(inputs: &[String], config: &RangelistConfig) -> Result<String, String> {
    let values = parse_integers(inputs, &config.compress.input_separators)?;
    render_intervals(&compress(values), config)
}

/// `normalize`: `text` rewritten with merged runs
pub fn normalize(text: &str, config: &RangelistConfig) -> Result<String, String> {
    let intervals = parse_to_intervals(text).map_err(|e| e.to_string())?;
    let merged: Vec<Interval> = flatten_iter(&intervals).compress_runs().collect();
    render_intervals(&merged, config)
}

/// `tokens`: the lexer atoms of `text` with their spans, as JSON
pub fn tokens(text: &str) -> Result<String, String> {
    let tokens = tokenize_with_spans(text);
    serde_json::to_string_pretty(&tokens).map_err(|e| format!("JSON serialization failed: {}", e))
}

fn render_intervals(intervals: &[Interval], config: &RangelistConfig) -> Result<String, String> {
    render(intervals, config.output.format, &config.render_options()).map_err(|e| e.to_string())
}

/// Splits every input on any of `separators` and parses the pieces as integers
pub fn parse_integers(inputs: &[String], separators: &str) -> Result<Vec<i64>, String> {
    inputs
        .iter()
        .flat_map(|input| input.split(|c: char| separators.contains(c)))
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .parse::<i64>()
                .map_err(|e| format!("Invalid integer '{}': {}", piece, e))
        })
        .collect()
}

/// Output format names accepted by `--format`
pub fn format_names() -> Vec<&'static str> {
    Format::ALL.iter().map(Format::name).collect()
}
