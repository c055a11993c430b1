// Command-line interface for rawmark
//
// Converts markdown that contains raw HTML into the editable document tree and
// prints it. The conversion itself lives in rawmark-babel; this binary reads
// files, loads configuration and picks the output rendering.
//
// Usage:
//  rawmark <input> [--to json|events|tree] [-o <file>]          - Convert (default)
//  rawmark convert <input> [--to json|events|tree] [-o <file>]  - Same as above (explicit)
//  rawmark tag <text>                                            - Show how a single tag is read
//  rawmark list-tags                                             - List the tag dispatch table
//
// Global options: --config <PATH> layers a TOML file over the defaults (a
// rawmark.toml in the working directory is picked up automatically), and
// --verbose turns on debug logging for the conversion.

use rawmark_babel::{default_tag_table, Html5everParser, MarkdownImporter, MarkdownOptions, SchemeSanitizer};
use rawmark_cli::cli::build_cli;
use rawmark_cli::transforms;
use rawmark_config::{Loader, OutputFormat, RawmarkConfig};
use std::fs;
use std::io;

const SUBCOMMANDS: &[&str] = &["convert", "tag", "list-tags", "help"];

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // The first argument may be a file; in that case "convert" is implied.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && (args[1] == "-" || !args[1].starts_with('-'))
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let format = match sub_matches.get_one::<String>("to") {
                Some(name) => name.parse().unwrap_or_else(|e: String| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }),
                None => config.output.format,
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, format, output, &config);
        }
        Some(("tag", sub_matches)) => {
            let text = sub_matches
                .get_one::<String>("text")
                .expect("text is required");
            handle_tag_command(text);
        }
        Some(("list-tags", _)) => {
            println!("Tags with a handler:\n");
            print!("{}", transforms::list_tags(default_tag_table()));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "rawmark=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    format: OutputFormat,
    output: Option<&str>,
    config: &RawmarkConfig,
) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let sanitizer = SchemeSanitizer::from(&config.sanitize);
    let importer = MarkdownImporter::new(&Html5everParser, &sanitizer)
        .with_options(MarkdownOptions::from(&config.markdown));
    log::debug!(target: "rawmark.cli", "converting {input} to {format}");

    let rendered = transforms::render(&source, format, &importer).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => fs::write(path, rendered).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{rendered}"),
    }
}

fn handle_tag_command(text: &str) {
    match transforms::describe_tag(text, default_tag_table()) {
        Some(description) => println!("{description}"),
        None => {
            eprintln!("No open or close tag at the start of {text:?}");
            std::process::exit(1);
        }
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> RawmarkConfig {
    let loader = Loader::new().with_optional_file("rawmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
