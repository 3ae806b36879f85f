//! Command-line interface for decl
//! Reads a source file, assembles its declaration outline and prints it in one of the
//! registered formats, or as editor diagnostics.
//!
//! Usage:
//!   decl outline `<source>` [--index `<json>`] [--format `<format>`] [--config `<toml>`]
//!   decl messages `<source>` [--index `<json>`]
//!   decl list-formats
//!
//! Without `--index`, the source is expected to be canonical verse and is indexed by the
//! built-in reference indexer.

use clap::{Arg, ArgMatches, Command};
use decl::decl::assembling::{assemble_with, Assembly};
use decl::decl::config::Loader;
use decl::decl::formats::FormatRegistry;
use decl::decl::indexing::{JsonIndex, SourceIndexer, VerseIndexer};
use std::fs;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("decl=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("decl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract declaration outlines and print them back in canonical form")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("outline")
                .about("Print the outline of a source file")
                .arg(source_arg())
                .arg(index_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (verse, json, yaml); defaults to the configured one"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("messages")
                .about("Print editor diagnostics for every declaration")
                .arg(source_arg())
                .arg(index_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("outline", sub)) => handle_outline_command(sub),
        Some(("messages", sub)) => handle_messages_command(sub),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("a subcommand is required"),
    }
}

fn source_arg() -> Arg {
    Arg::new("source")
        .help("Path to the source file")
        .required(true)
        .index(1)
}

fn index_arg() -> Arg {
    Arg::new("index")
        .long("index")
        .short('i')
        .help("JSON dump of indexer records for the source file")
}

/// Handle the outline command
fn handle_outline_command(matches: &ArgMatches) {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail(&format!("Invalid format option: {}", e)));
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| fail(&format!("Configuration error: {}", e)));

    let (_, assembly) = load(matches);
    let registry = FormatRegistry::with_style(config.verse.style());
    let output = registry
        .serialize(&assembly.outline, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            std::process::exit(1);
        });

    print!("{}", output);
    for failure in &assembly.failures {
        eprintln!("{}: {}", assembly.path, failure);
    }
}

/// Handle the messages command
fn handle_messages_command(matches: &ArgMatches) {
    let (text, assembly) = load(matches);
    for message in assembly.messages(&text) {
        println!("{}", message);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}

/// Read the source (and index dump, if given) and assemble its outline
fn load(matches: &ArgMatches) -> (String, Assembly) {
    let path = matches
        .get_one::<String>("source")
        .expect("source is required");
    let text = read(path);

    let indexer: Box<dyn SourceIndexer> = match matches.get_one::<String>("index") {
        Some(index_path) => Box::new(JsonIndex::new(read(index_path))),
        None => Box::new(VerseIndexer::new()),
    };

    let assembly = assemble_with(path, &text, indexer.as_ref())
        .unwrap_or_else(|e| fail(&format!("Index error: {}", e)));
    (text, assembly)
}

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| fail(&format!("Error reading {}: {}", path, e)))
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
