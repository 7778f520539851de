//! CLI entry point for the `lgraph` command-line tool.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use linkgraph::cli::commands::{self, CliGraph};
use linkgraph::config::SourceConfig;
use linkgraph::source::DocumentFetcher;
use linkgraph::types::{GraphError, GraphResult};

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "Inspect a Solr-backed web-link graph as a sequential graph"
)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Solr core URL, overrides the configuration
    #[arg(long)]
    endpoint: Option<String>,

    /// Read documents from a JSON dump instead of Solr
    #[arg(long)]
    documents: Option<PathBuf>,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Show the graph name and node count
    Info,
    /// List nodes with their URL and successors
    Nodes {
        /// Maximum nodes to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the arc list, one "source<TAB>target" per line
    Arcs,
    /// Degree statistics
    Stats,
}

fn run<F: DocumentFetcher>(graph: &CliGraph<F>, command: Commands, json: bool) -> GraphResult<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match command {
        Commands::Info => commands::cmd_info(graph, json, &mut out)?,
        Commands::Nodes { limit } => commands::cmd_nodes(graph, limit, json, &mut out)?,
        Commands::Arcs => commands::cmd_arcs(graph, &mut out)?,
        Commands::Stats => commands::cmd_stats(graph, json, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn try_main(cli: Cli, json: bool) -> GraphResult<()> {
    let mut config = SourceConfig::resolve(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config = config.endpoint(endpoint);
    }

    match cli.documents {
        Some(path) => run(&commands::open_dump(&path, config.rows)?, cli.command, json),
        None => run(&commands::open_solr(config)?, cli.command, json),
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = try_main(cli, json);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Http { .. } | GraphError::MalformedResponse(_) => 2,
            GraphError::Config(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
