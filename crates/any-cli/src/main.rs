//! `anyv` CLI — inspect JSON documents as dynamically-typed variant trees.
//!
//! ## Usage
//!
//! ```sh
//! # Print the variant tree of a document (stdin → stdout)
//! echo '{"name":"Alice","scores":[95,87]}' | anyv inspect
//!
//! # Treat JSON objects as ECMA arrays instead of maps
//! anyv inspect --ecma -i data.json
//!
//! # Look up a value by pointer
//! anyv get /scores/1 -i data.json
//!
//! # Count nodes per kind
//! anyv stats -i data.json
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Read};

use any_core::{from_json, Any, AnyType, ObjectKind};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "anyv",
    version,
    about = "Inspect documents as dynamically-typed variant trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Source {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Load JSON objects as ECMA arrays instead of maps
    #[arg(long)]
    ecma: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the variant tree with one line per node
    Inspect {
        #[command(flatten)]
        source: Source,
    },
    /// Print the value at a slash-separated pointer as JSON
    Get {
        /// Pointer such as /items/0/name ("" is the whole document)
        pointer: String,
        #[command(flatten)]
        source: Source,
    },
    /// Show node counts per kind and the maximum depth
    Stats {
        #[command(flatten)]
        source: Source,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Inspect { source } => {
            let tree = load(&source)?;
            let mut out = String::new();
            render_tree(&tree, None, 0, &mut out);
            print!("{}", out);
        }
        Commands::Get { pointer, source } => {
            let tree = load(&source)?;
            let value = tree
                .pointer(&pointer)
                .with_context(|| format!("No value at '{}'", pointer))?;
            let pretty = serde_json::to_string_pretty(value)?;
            println!("{}", pretty);
        }
        Commands::Stats { source } => {
            let tree = load(&source)?;
            let mut counts = BTreeMap::new();
            let depth = collect_stats(&tree, 1, &mut counts);
            for ty in AnyType::ALL {
                let count = counts.get(&ty).copied().unwrap_or(0);
                println!("{:<9} {}", ty.as_str(), count);
            }
            println!("{:<9} {}", "nodes", counts.values().sum::<usize>());
            println!("{:<9} {}", "depth", depth);
        }
    }

    Ok(())
}

/// Install a stderr fmt subscriber. `RUST_LOG` applies unless `--verbose`
/// forces debug output; the default level is `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read and parse the input, then lift it into an owning variant tree.
fn load(source: &Source) -> Result<Any<'static>> {
    let text = read_input(source.input.as_deref())?;
    let json: serde_json::Value =
        serde_json::from_str(&text).context("Input is not valid JSON")?;
    let objects = if source.ecma {
        ObjectKind::Ecma
    } else {
        ObjectKind::Map
    };
    tracing::debug!(bytes = text.len(), ?objects, "loaded input");
    from_json(json, objects).context("Input cannot be represented as a variant tree")
}

/// Append one line per node: `[label: ]kTag payload`, children indented by
/// two spaces.
fn render_tree(value: &Any<'_>, label: Option<&str>, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    if let Some(label) = label {
        out.push_str(label);
        out.push_str(": ");
    }
    out.push_str(value.type_str());
    match value {
        Any::Int(v) => {
            let _ = write!(out, " {}", v);
        }
        Any::Double(v) => {
            let _ = write!(out, " {}", v);
        }
        Any::String(s) => {
            let _ = write!(out, " {:?}", s);
        }
        Any::Null => {}
        Any::Vector(list) => {
            let _ = write!(out, " ({})", list.len());
        }
        Any::Map(map) => {
            let _ = write!(out, " ({})", map.len());
        }
        Any::Ecma(ecma) => {
            let _ = write!(out, " ({})", ecma.len());
        }
    }
    out.push('\n');

    match value {
        Any::Vector(list) => {
            for (i, child) in list.iter().enumerate() {
                render_tree(child, Some(format!("[{}]", i).as_str()), depth + 1, out);
            }
        }
        Any::Map(map) => {
            for (key, child) in map.iter() {
                render_tree(child, Some(key), depth + 1, out);
            }
        }
        Any::Ecma(ecma) => {
            for (key, child) in ecma.iter() {
                render_tree(child, Some(key), depth + 1, out);
            }
        }
        _ => {}
    }
}

/// Count nodes per kind; returns the depth of the deepest node.
fn collect_stats(value: &Any<'_>, depth: usize, counts: &mut BTreeMap<AnyType, usize>) -> usize {
    *counts.entry(value.get_type()).or_insert(0) += 1;
    let children: Vec<&Any<'_>> = match value {
        Any::Vector(list) => list.iter().collect(),
        Any::Map(map) => map.values().collect(),
        Any::Ecma(ecma) => ecma.values().collect(),
        _ => Vec::new(),
    };
    children
        .into_iter()
        .map(|child| collect_stats(child, depth + 1, counts))
        .fold(depth, usize::max)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
