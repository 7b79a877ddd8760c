// Command-line interface for blockmorph
//
// This binary converts editor blocks between the text, heading and quote types. Blocks are read
// and written as JSON envelopes ({"name": "core/quote", "attributes": {...}}); the conversion
// itself is done by the blockmorph-babel registry.
//
// Usage:
//  blockmorph <input> --to <type> [--output <file>] [--compact]          - Convert blocks (default)
//  blockmorph convert <input> --to <type> [--output <file>] [--compact]  - Same as above (explicit)
//  blockmorph targets <type>                                             - Types reachable from <type>
//  blockmorph --list-transforms                                          - List available transforms
//
// The input may be a single block or an array of blocks; "-" reads from stdin. The output is
// always an array, since one block can turn into several (a quote promoted to a heading keeps its
// remaining paragraphs as a second, quote block).

use blockmorph_babel::interchange::{convert_blocks, parse_blocks, to_json, to_json_pretty};
use blockmorph_babel::{BlockType, TransformRegistry, TransformRules};
use blockmorph_config::{BlockmorphConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Block types accepted on the command line
const AVAILABLE_BLOCK_TYPES: &[&str] = &[
    "text",
    "heading",
    "quote",
    "core/text",
    "core/heading",
    "core/quote",
];

fn build_cli() -> Command {
    Command::new("blockmorph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert editor blocks between text, heading and quote")
        .long_about(
            "blockmorph converts the attributes of rich-text editor blocks between block types.\n\n\
            Commands:\n  \
            - convert: Transform blocks into another block type\n  \
            - targets: Show which types a block type converts into\n\n\
            Examples:\n  \
            blockmorph quote.json --to text             # Flatten a quote into a text block\n  \
            blockmorph text.json --to quote -o out.json # Split text at the citation break\n  \
            cat quote.json | blockmorph - --to heading  # Promote the first quote paragraph"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a blockmorph.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert blocks into another block type (default command)")
                .long_about(
                    "Convert one block, or an array of blocks, into the target type.\n\n\
                    Supported conversions:\n  \
                    - text    -> quote    split at the citation break\n  \
                    - quote   -> text     join body and citation with a citation break\n  \
                    - heading -> quote    heading content becomes the quote body\n  \
                    - quote   -> heading  first paragraph becomes a heading; the rest stays a quote\n\n\
                    Output goes to stdout by default, or use -o to specify a file."
                )
                .arg(
                    Arg::new("input")
                        .help("Input JSON file, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target block type (required)")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_BLOCK_TYPES,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Write JSON on a single line, overriding output.pretty")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("targets")
                .about("List the block types a block type converts into")
                .arg(
                    Arg::new("type")
                        .help("Source block type")
                        .required(true)
                        .index(1)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_BLOCK_TYPES,
                        )),
                ),
        )
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockmorph=warn,blockmorph_babel=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A leading input path means the convert subcommand was left implicit
            if args.len() > 1
                && (args[1] == "-" || !args[1].starts_with('-'))
                && args[1] != "convert"
                && args[1] != "targets"
                && args[1] != "help"
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

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command(&TransformRegistry::default());
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let registry = TransformRegistry::with_rules(TransformRules::from(&config.transform));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = parse_block_type(
                sub_matches
                    .get_one::<String>("to")
                    .expect("to is required"),
            );
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let pretty = config.output.pretty && !sub_matches.get_flag("compact");
            handle_convert_command(&registry, input, to, output, pretty);
        }
        Some(("targets", sub_matches)) => {
            let source = parse_block_type(
                sub_matches
                    .get_one::<String>("type")
                    .expect("type is required"),
            );
            handle_targets_command(&registry, source);
        }
        _ => {
            // Only global flags were given, e.g. `blockmorph --config x.toml`
            eprintln!("No command given. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn parse_block_type(name: &str) -> BlockType {
    name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(
    registry: &TransformRegistry,
    input: &str,
    to: BlockType,
    output: Option<&str>,
    pretty: bool,
) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let blocks = parse_blocks(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    tracing::info!(count = blocks.len(), %to, "converting blocks");

    let converted = convert_blocks(registry, &blocks, to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let serialized = if pretty {
        to_json_pretty(&converted)
    } else {
        to_json(&converted)
    };
    let mut json = serialized.unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, json).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{json}"),
    }
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

/// Handle the targets command
fn handle_targets_command(registry: &TransformRegistry, source: BlockType) {
    for target in registry.targets_for(source) {
        println!("{target}");
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command(registry: &TransformRegistry) {
    println!("Available transforms:\n");
    for label in registry.list_transforms() {
        println!("  {label}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> BlockmorphConfig {
    let loader = Loader::new().with_optional_file("blockmorph.toml");
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
