use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by mdview-render's FormatRegistry.
// Build scripts can't reach the library, so the names are duplicated here.
const AVAILABLE_FORMATS: &[&str] = &["fragment", "html"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render lightweight markdown into a self-contained HTML page")
        .arg(
            Arg::new("input")
                .help("Input markdown file ('-' or absent reads stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output format")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
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
            Arg::new("title")
                .long("title")
                .help("Document title")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("css")
                .long("css")
                .help("Stylesheet appended after the built-in styles")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an mdview.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("generate-css").about("Output the built-in CSS"));

    generate_to(Bash, &mut cmd, "mdview", &outdir)?;
    generate_to(Zsh, &mut cmd, "mdview", &outdir)?;
    generate_to(Fish, &mut cmd, "mdview", &outdir)?;

    Ok(())
}
