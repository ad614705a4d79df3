//! Command-line interface for range strings
//! This binary reads and writes compact integer ranges such as `1-4,6,9,10-12`.
//!
//! Usage:
//!   rangelist expand `<text>`                  - Print every integer the ranges name
//!   rangelist intervals `<text>`               - Print the intervals as written
//!   rangelist compress [`<integers>`...]        - Merge integers (args or stdin) into ranges
//!   rangelist normalize `<text>`               - Rewrite ranges with merged runs
//!   rangelist tokens `<text>`                  - Dump lexer tokens as JSON
//!
//! Global flags: `--format <text|list|json|yaml>`, `--config <file>`.
//! Set `RUST_LOG=debug` to see what the tokenizer skipped.

mod commands;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgMatches, Command};
use rangelist_config::{ConfigError, Loader, RangelistConfig, LOCAL_CONFIG_FILE};
use rangelist_parser::range::Format;
use std::io::{BufWriter, Read};

fn text_arg() -> Arg {
    Arg::new("text")
        .help("Range string, e.g. 1-4,6,9")
        .required(true)
        .allow_hyphen_values(true)
        .index(1)
}

fn build_cli() -> Command {
    Command::new("rangelist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for reading and writing integer range strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format (default from configuration: text)")
                .value_parser(PossibleValuesParser::new(commands::format_names())),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("expand")
                .about("Print every integer named by the ranges")
                .arg(text_arg()),
        )
        .subcommand(
            Command::new("intervals")
                .about("Print the intervals as written")
                .arg(text_arg()),
        )
        .subcommand(
            Command::new("compress")
                .about("Merge ascending integers into ranges (reads stdin when none are given)")
                .arg(
                    Arg::new("values")
                        .help("Integers, separated by commas or whitespace")
                        .num_args(0..)
                        .allow_hyphen_values(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Rewrite ranges with consecutive values merged")
                .arg(text_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the lexer tokens with their spans as JSON")
                .arg(text_arg()),
        )
}

fn main() {
    env_logger::init();
    let matches = build_cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let result = match matches.subcommand() {
        Some(("expand", sub)) => {
            let stdout = std::io::stdout();
            commands::expand(text(sub), &config, BufWriter::new(stdout.lock()))
        }
        Some(("intervals", sub)) => commands::intervals(text(sub), &config).map(print_line),
        Some(("normalize", sub)) => commands::normalize(text(sub), &config).map(print_line),
        Some(("tokens", sub)) => commands::tokens(text(sub)).map(print_line),
        Some(("compress", sub)) => handle_compress_command(sub, &config).map(print_line),
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Defaults, then `rangelist.toml` in the working directory, then `--config`, then flags
fn load_config(matches: &ArgMatches) -> Result<RangelistConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        log::debug!("loading configuration from {}", path);
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        let format = format.parse::<Format>().map_err(ConfigError::Message)?;
        loader = loader.with_format(format)?;
    }
    loader.build()
}

fn print_line(output: String) {
    println!("{}", output);
}

fn text(sub: &ArgMatches) -> &str {
    sub.get_one::<String>("text")
        .map(String::as_str)
        .unwrap_or_default()
}

/// Handle the compress command, falling back to stdin when no integers are given
fn handle_compress_command(sub: &ArgMatches, config: &RangelistConfig) -> Result<String, String> {
    let mut inputs: Vec<String> = sub
        .get_many::<String>("values")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if inputs.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        inputs.push(buffer);
    }

    commands::compress_values(&inputs, config)
}
