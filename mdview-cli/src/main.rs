// Command-line interface for mdview
//
// This binary is the shell around the mdview-render library: it owns everything the library
// refuses to do. It reads the input (a file, or stdin), picks the document title, stamps the
// generation time, and writes the result to stdout or a file.
//
// Usage:
//  mdview [<input>] [--to <format>] [--output <file>] [--title <text>] [--css <file>]
//  mdview generate-css                   - Print the built-in stylesheet
//  mdview --list-formats                 - List available output formats
//
// Title selection: --title wins, then the input file stem, then the configured default
// (used for stdin). The output format comes from --to, then the --output extension, then
// the configuration.

use chrono::{DateTime, Local, TimeZone};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdview_config::{Loader, MdViewConfig};
use mdview_render::{
    DocumentMetadata, Format, FormatRegistry, HtmlOptions, RenderOptions, Renderer,
};
use std::fmt::{Display, Write as _};
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const STDIN_MARKER: &str = "-";
const LOG_ENV: &str = "MDVIEW_LOG";

fn build_cli() -> Command {
    Command::new("mdview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render lightweight markdown into a self-contained HTML page")
        .long_about(
            "mdview renders a small markdown dialect (headers, emphasis, code, links,\n\
            lists, checkboxes, quotes, rules and fenced code) into a styled HTML page.\n\n\
            Input is read from the given file, or from stdin when no file (or '-') is given.\n\
            Output goes to stdout unless --output is set.\n\n\
            Examples:\n  \
            mdview notes.md                      # Full page to stdout, titled 'notes'\n  \
            mdview notes.md -o notes.html        # Write the page to a file\n  \
            cat notes.md | mdview --to fragment  # Body only, from stdin\n  \
            mdview generate-css > custom.css     # Start a custom stylesheet",
        )
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("input")
                .help("Input markdown file ('-' or absent reads stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output format (html, fragment)")
                .long_help(
                    "Output format to produce.\n\n\
                    Defaults to the format matching the --output extension, then to the\n\
                    configured output.format.",
                )
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
                .help("Document title (defaults to the input file stem)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("css")
                .long("css")
                .value_name("PATH")
                .help("Stylesheet appended after the built-in styles")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdview.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the built-in CSS used for HTML pages")
                .long_about(
                    "Outputs the stylesheet embedded in every generated page.\n\n\
                    Save it, edit it, and pass it back with --css to extend the defaults.\n\n\
                    Examples:\n  \
                    mdview generate-css                 # Print CSS to stdout\n  \
                    mdview generate-css > custom.css    # Save to file for editing",
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Some(("generate-css", _)) = matches.subcommand() {
        handle_generate_css_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    handle_render_command(&matches, &config);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the default render command
fn handle_render_command(matches: &ArgMatches, config: &MdViewConfig) {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .filter(|path| *path != STDIN_MARKER);
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    let mut html_options = HtmlOptions::from(&config.document);
    let css_path = matches
        .get_one::<String>("css")
        .or(config.document.custom_css.as_ref());
    if let Some(path) = css_path {
        let css = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading stylesheet '{path}': {e}");
            std::process::exit(1);
        });
        html_options = html_options.with_custom_css(css);
    }

    let registry = FormatRegistry::with_options(html_options);
    let to = resolve_format(
        &registry,
        matches.get_one::<String>("to").map(|s| s.as_str()),
        output,
        config,
    );
    let format = registry.get(&to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    });

    let source = read_source(input).unwrap_or_else(|e| {
        let name = input.unwrap_or("<stdin>");
        eprintln!("Error reading file '{name}': {e}");
        std::process::exit(1);
    });

    let title = matches
        .get_one::<String>("title")
        .cloned()
        .or_else(|| input.and_then(title_from_path))
        .unwrap_or_else(|| config.document.default_title.clone());

    let generated_at = format_timestamp(&Local::now(), &config.document.timestamp_format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let renderer = Renderer::with_options(RenderOptions::from(&config.render));
    let rendered = renderer.render_lines(&source);
    if let Some(line) = rendered.unterminated_fence {
        tracing::warn!(line, "fenced code block opened on line {line} is never closed");
    }

    let meta = DocumentMetadata::new(title, generated_at);
    let text = format.serialize(&rendered, &meta);
    tracing::debug!(format = %to, bytes = text.len(), "serialized document");

    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{text}"),
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", mdview_render::default_css());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name:<10} {}", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdViewConfig {
    let loader = Loader::new().with_optional_file("mdview.toml");
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

fn read_source(input: Option<&str>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => io::read_to_string(io::stdin()),
    }
}

/// Pick the output format: explicit flag, then output extension, then config.
fn resolve_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    output: Option<&str>,
    config: &MdViewConfig,
) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.output.format.clone())
}

fn title_from_path(path: &str) -> Option<String> {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Format `now` with a strftime-style pattern, rejecting invalid patterns.
fn format_timestamp<Tz>(now: &DateTime<Tz>, pattern: &str) -> Result<String, String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", now.format(pattern))
        .map_err(|_| format!("Invalid timestamp format '{pattern}'"))?;
    Ok(out)
}
