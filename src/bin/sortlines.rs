//! Command-line interface for sortlines
//! This binary applies line operations to files or stdin, acting as a minimal editor host.
//!
//! Usage:
//!   sortlines run `<operation>` [`<path>`] [--selection `<S>`] [--seed `<N>`]  - Transform lines
//!   sortlines tree [`<path>`] [--format json|treeviz]                         - Dump the indentation forest
//!   sortlines list                                                           - List available operations
//!
//! Logging goes to stderr and is controlled by `SORTLINES_LOG` (default `warn`).

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use sortlines::sortlines::document::Document;
use sortlines::sortlines::processor::{LineProcessor, ProcessOutcome};
use sortlines::sortlines::selection::{Selection, SelectionSpec};
use sortlines::sortlines::tree::{build_forest, to_treeviz};
use sortlines::sortlines::Operation;
use sortlines_config::{Loader, SortLinesConfig};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("sortlines")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort, deduplicate and shuffle blocks of lines")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Apply an operation to a file or stdin")
                .arg(
                    Arg::new("operation")
                        .help("Operation name (see `sortlines list`)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("path")
                        .help("File to read; stdin when omitted")
                        .index(2),
                )
                .arg(
                    Arg::new("selection")
                        .long("selection")
                        .short('s')
                        .help("Lines to transform as START[:COL]-END[:COL], 1-based lines"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the shuffle operation")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("filter-blank-lines")
                        .long("filter-blank-lines")
                        .help("Drop blank lines before transforming")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .short('i')
                        .help("Write the result back to <path> instead of stdout")
                        .requires("path")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the indentation forest of a file or stdin")
                .arg(
                    Arg::new("path")
                        .help("File to read; stdin when omitted")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["treeviz", "json"])
                        .default_value("treeviz"),
                ),
        )
        .subcommand(Command::new("list").about("List available operations"))
        .get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => handle_run_command(run_matches),
        Some(("tree", tree_matches)) => handle_tree_command(tree_matches),
        Some(("list", _)) => handle_list_command(),
        _ => unreachable!(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SORTLINES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the run command
fn handle_run_command(matches: &ArgMatches) {
    let operation_name = matches
        .get_one::<String>("operation")
        .expect("operation is required");
    let operation: Operation = operation_name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable operations:");
        for op in Operation::ALL {
            eprintln!("  {}", op);
        }
        std::process::exit(1);
    });

    let path = matches.get_one::<String>("path");
    let config = load_config(matches);
    let source = read_source(path.map(String::as_str));
    let (body, terminator) = split_final_newline(&source);

    let selection = match matches.get_one::<String>("selection") {
        Some(raw) => {
            let spec: SelectionSpec = raw.parse().unwrap_or_else(|e| exit_with_error(e));
            spec.to_selection(&Document::from_text(body))
        }
        None => Selection::default(),
    };

    let processor = LineProcessor::from_config(&config);
    let outcome = processor
        .process(body, operation, &selection)
        .unwrap_or_else(|e| exit_with_error(e));

    if let ProcessOutcome::Skipped = outcome {
        tracing::info!("selection does not span multiple lines, output unchanged");
    }
    let output = format!("{}{}", outcome.text_or(body), terminator);

    match path {
        Some(path) if matches.get_flag("in-place") => {
            if let Err(e) = std::fs::write(path, output) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        _ => print!("{}", output),
    }
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) {
    let source = read_source(matches.get_one::<String>("path").map(String::as_str));
    let (body, _) = split_final_newline(&source);
    let document = Document::from_text(body);
    let forest = build_forest(document.lines().iter().cloned());

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("treeviz");
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&forest).unwrap_or_else(|e| {
                eprintln!("Error formatting tree: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        _ => print!("{}", to_treeviz(&forest)),
    }
}

/// Handle the list command
fn handle_list_command() {
    println!("Available operations:\n");
    for op in Operation::ALL {
        println!("  {}", op);
        println!("    {}", op.description());
    }
}

fn load_config(matches: &ArgMatches) -> SortLinesConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("filter-blank-lines") {
        loader = loader
            .set_override("pipeline.filter_blank_lines", true)
            .unwrap_or_else(|e| exit_with_error(e));
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        loader = loader
            .set_override("shuffle.seed", *seed)
            .unwrap_or_else(|e| exit_with_error(e));
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

fn exit_with_error(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

/// Split off the newline that terminates the last line, so it is not treated
/// as an extra empty line to sort.
fn split_final_newline(source: &str) -> (&str, &str) {
    if let Some(body) = source.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = source.strip_suffix('\n') {
        (body, "\n")
    } else {
        (source, "")
    }
}

fn read_source(path: Option<&str>) -> String {
    match path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }),
        None => {
            let mut source = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut source) {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
            source
        }
    }
}
