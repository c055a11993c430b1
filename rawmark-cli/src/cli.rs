// The rawmark command line definition.
//
// Shared with build.rs through include!, so the generated shell completions
// always match the parser the binary uses. Keep this file free of crate
// paths and inner doc comments.

use clap::{Arg, ArgAction, Command, ValueHint};

/// All output formats accepted by `--to`.
pub const AVAILABLE_FORMATS: &[&str] = &["json", "events", "tree"];

pub fn build_cli() -> Command {
    Command::new("rawmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown with raw HTML into an editable document tree")
        .long_about(
            "rawmark reads markdown, including any raw HTML embedded in it, and\n\
            prints the editable document tree an editor would load.\n\n\
            Nodes that came from raw HTML carry the tag name they were written as\n\
            (rawHtml), so they can be written back unchanged.\n\n\
            Examples:\n  \
            rawmark doc.md                      # Tree as JSON\n  \
            rawmark doc.md --to tree            # Indented tree view\n  \
            rawmark doc.md --to events          # Builder operations, in order\n  \
            rawmark tag '<a href=\"x\">'          # How a single tag is read",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a rawmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion decisions to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a markdown file (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input markdown file, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to output.format from the configuration)")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("tag")
                .about("Show how the tag at the start of TEXT is recognized")
                .arg(
                    Arg::new("text")
                        .help("Text starting with an HTML open or close tag")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-tags").about("List the tag names with a handler"))
}
