use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of AVAILABLE_BLOCK_TYPES in src/main.rs
// Build scripts can't reach src/ modules, so the list is repeated here
const AVAILABLE_BLOCK_TYPES: &[&str] = &[
    "text",
    "heading",
    "quote",
    "core/text",
    "core/heading",
    "core/quote",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let block_types = || clap::builder::PossibleValuesParser::new(AVAILABLE_BLOCK_TYPES);

    let mut cmd = Command::new("blockmorph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert editor blocks between text, heading and quote")
        .arg_required_else_help(true)
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
                        .value_parser(block_types())
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
                        .value_parser(block_types()),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "blockmorph", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "blockmorph", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "blockmorph", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
