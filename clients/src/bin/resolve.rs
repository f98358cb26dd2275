//! `sosa-resolve` — Resolves resource IRIs into typed records.
//!
//! Repositories come from a TOML configuration file, from repeated
//! `--load KIND=PATH` arguments, or both; `--load` sources are loaded after
//! the configured ones. IDs may be full IRIs or compact IRIs such as
//! `sosa:Sensor`.
//!
//! **Usage:**
//! ```text
//! sosa-resolve [--config <file>] [--load <kind>=<path>]... [--units <file>]...
//!              [--json] [--stats] [-v] <kind> <id>...
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use sosa_resolver::{Config, EntityKind, ResolutionService, SourceConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resolve SOSA resource IRIs into typed records.
#[derive(Parser)]
#[command(
    name = "sosa-resolve",
    about = "Resolve SOSA resource IRIs into typed records"
)]
struct Args {
    /// Service configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load a repository into a kind's group, as KIND=PATH. Repeatable.
    #[arg(long = "load", value_name = "KIND=PATH", value_parser = parse_source)]
    loads: Vec<SourceConfig>,

    /// Extra QUDT unit file. Repeatable.
    #[arg(long = "units", value_name = "FILE")]
    units: Vec<PathBuf>,

    /// Print records as JSON.
    #[arg(long)]
    json: bool,

    /// Print per-kind repository statistics.
    #[arg(long)]
    stats: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Entity kind: feature-of-interest, property, system, or procedure.
    #[arg(value_parser = parse_kind, required_unless_present = "stats")]
    kind: Option<EntityKind>,

    /// Resource IRIs or compact IRIs to resolve.
    #[arg(requires = "kind")]
    ids: Vec<String>,
}

fn parse_kind(s: &str) -> std::result::Result<EntityKind, String> {
    s.parse().map_err(|e: sosa_resolver::Error| e.to_string())
}

fn parse_source(s: &str) -> std::result::Result<SourceConfig, String> {
    let (kind, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=PATH, got {s:?}"))?;
    Ok(SourceConfig {
        kind: parse_kind(kind)?,
        path: PathBuf::from(path),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?,
        None => Config::default(),
    };
    config.units.catalogs.extend(args.units.iter().cloned());
    config.sources.extend(args.loads.iter().cloned());

    let service =
        ResolutionService::from_config(&config).context("Failed to load repositories")?;

    if args.stats {
        print_stats(&service)?;
    }

    let Some(kind) = args.kind else {
        return Ok(());
    };
    for id in &args.ids {
        let iri = sosa_vocab::expand(id).unwrap_or_else(|| id.clone());
        tracing::debug!("Resolving {} as {}", iri, kind);
        let resource = service
            .resolve(kind, &iri)
            .with_context(|| format!("Failed to resolve {iri}"))?;
        let value = serde_json::to_value(&resource).context("Failed to serialize record")?;

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&value).context("Failed to format record")?
            );
        } else {
            println!("{} ({})", resource.resource_iri(), resource);
            print_fields(&value, 1);
            println!();
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_stats(service: &ResolutionService) -> Result<()> {
    println!("{:<20} {:>6} {:>9} {:>9}", "KIND", "REPOS", "SUBJECTS", "TRIPLES");
    for kind in service.kinds() {
        println!(
            "{:<20} {:>6} {:>9} {:>9}",
            kind,
            service.repository_count(kind)?,
            service.subject_count(kind)?,
            service.triple_count(kind)?
        );
    }
    println!();
    Ok(())
}

fn print_fields(value: &Value, depth: usize) {
    let Value::Object(fields) = value else {
        return;
    };
    let indent = "  ".repeat(depth);
    for (name, field) in fields {
        match field {
            Value::Object(_) => {
                println!("{indent}{name}:");
                print_fields(field, depth + 1);
            }
            Value::String(s) if s.is_empty() => {}
            Value::String(s) => match sosa_vocab::compact(s) {
                Some(curie) => println!("{indent}{name}: {curie}"),
                None => println!("{indent}{name}: {s}"),
            },
            other => println!("{indent}{name}: {other}"),
        }
    }
}
