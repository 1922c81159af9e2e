//! Command-line interface for toc
//! This binary extracts the headings of a document, builds the nested outline and prints it.
//!
//! Usage:
//!   toc `<path>` [--from `<format>`] [--to `<format>`]   - Print the outline of a document
//!   toc `<path>` --active `<id>`                         - Print the ancestor chain of one entry
//!   toc --list-formats                                   - List available formats
//!
//! Configuration is layered: built-in defaults, then `.toc.toml` in the working directory if
//! present, then `--config <file>`, then the level flags. Set `RUST_LOG=debug` for diagnostics.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, warn};
use std::path::Path;
use toc_babel::{outline_from_source, FormatRegistry};
use toc_config::{ConfigError, Loader, TocConfig};
use toc_outline::OutlineTree;

const LOCAL_CONFIG: &str = ".toc.toml";

fn main() {
    env_logger::init();

    let matches = Command::new("toc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds a table of contents from the headings of a document")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the document (html, markdown or a json heading list)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Input format (default: detected from the file extension)"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Output format (default: output.format from the config)"),
        )
        .arg(
            Arg::new("active")
                .long("active")
                .short('a')
                .help("Print the path from the outline root to the entry with this id"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("min-level")
                .long("min-level")
                .value_parser(clap::value_parser!(i64).range(0..))
                .help("Shallowest heading level to include"),
        )
        .arg(
            Arg::new("max-level")
                .long("max-level")
                .value_parser(clap::value_parser!(i64).range(0..))
                .help("Deepest heading level to include"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A document path is required");
        std::process::exit(1);
    };

    let tree = build_outline(&registry, &config, path, matches.get_one::<String>("from"));

    match matches.get_one::<String>("active") {
        Some(id) => handle_active_command(&tree, id),
        None => {
            let to = matches
                .get_one::<String>("to")
                .cloned()
                .unwrap_or_else(|| config.output.format.clone());
            handle_print_command(&registry, &tree, &to);
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<TocConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(&level) = matches.get_one::<i64>("min-level") {
        loader = loader.set_override("extract.min_level", level)?;
    }
    if let Some(&level) = matches.get_one::<i64>("max-level") {
        loader = loader.set_override("extract.max_level", level)?;
    }
    loader.build()
}

/// Read, extract and build; any failure ends the process
fn build_outline(
    registry: &FormatRegistry,
    config: &TocConfig,
    path: &str,
    from: Option<&String>,
) -> OutlineTree {
    let format = match from {
        Some(format) => format.as_str(),
        None => registry.detect(path).unwrap_or_else(|| {
            eprintln!(
                "Cannot detect the input format of '{}', pass --from <format>",
                path
            );
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            std::process::exit(1);
        }),
    };

    let source = std::fs::read_to_string(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", path, e);
        std::process::exit(1);
    });

    let options = config.extract.to_options().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    debug!("building outline of {} as {}", path, format);
    outline_from_source(registry, &source, format, &options, &config.ids.builder())
        .unwrap_or_else(|e| {
            eprintln!("Extraction error: {}", e);
            std::process::exit(1);
        })
}

/// Handle the default command: serialize the whole outline
fn handle_print_command(registry: &FormatRegistry, tree: &OutlineTree, to: &str) {
    let output = registry.serialize(tree, to).unwrap_or_else(|e| {
        eprintln!("Output error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle --active: print the breadcrumb, or nothing when the id is unknown
fn handle_active_command(tree: &OutlineTree, id: &str) {
    match tree.find_active_path(id) {
        Ok(path) => {
            let crumbs: Vec<&str> = path.iter().map(|node| node.text()).collect();
            println!("{}", crumbs.join(" > "));
        }
        Err(e) => warn!("no active highlight: {}", e),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let directions = match (format.supports_extraction(), format.supports_serialization())
            {
                (true, true) => "input, output",
                (true, false) => "input",
                (false, true) => "output",
                (false, false) => "-",
            };
            println!("  {} ({})", name, directions);
            println!("    {}", format.description());
            println!();
        }
    }
}
