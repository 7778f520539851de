//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::config::SourceConfig;
use crate::graph::{GraphLoader, ProgressLogger, SequentialLinkGraph, SolrGraphLoader};
use crate::source::{DocumentFetcher, DocumentSet, SolrWebGraph};
use crate::types::GraphResult;

/// Link graph as seen by the CLI, over any document fetcher.
pub type CliGraph<F> = SequentialLinkGraph<SolrWebGraph<F>>;

/// Open the graph served by the Solr core in `config`.
pub fn open_solr(config: SourceConfig) -> GraphResult<CliGraph<crate::source::SolrFetcher>> {
    let name = config.endpoint.clone();
    let mut progress = ProgressLogger::new("nodes");
    SolrGraphLoader::new(config)?.load_sequential(&name, Some(&mut progress))
}

/// Open the graph stored in a JSON document dump.
pub fn open_dump(path: &Path, rows: usize) -> GraphResult<CliGraph<DocumentSet>> {
    let docs = DocumentSet::from_json_file(path)?;
    let name = path.display().to_string();
    SolrGraphLoader::with_fetcher(docs, rows).load_offline(&name, None)
}

/// Print the graph's name and node count.
pub fn cmd_info<F: DocumentFetcher>(
    graph: &CliGraph<F>,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    if json {
        let info = serde_json::json!({
            "graph": graph.to_string(),
            "nodes": graph.num_nodes(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "Graph: {graph}")?;
        writeln!(out, "Nodes: {}", graph.num_nodes())?;
    }
    Ok(())
}

/// Print nodes with their URL and successors.
pub fn cmd_nodes<F: DocumentFetcher>(
    graph: &CliGraph<F>,
    limit: Option<usize>,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut rows = Vec::new();

    for node in graph.node_iterator()?.take(limit) {
        let node = node?;
        let url = graph.source().url_of(node.id).unwrap_or_default();
        if json {
            rows.push(serde_json::json!({
                "id": node.id,
                "url": url,
                "successors": node.successors,
            }));
        } else {
            let successors: Vec<String> = node.successors.iter().map(u64::to_string).collect();
            writeln!(out, "{}\t{}\t[{}]", node.id, url, successors.join(","))?;
        }
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    }
    Ok(())
}

/// Print one `source\ttarget` line per arc.
pub fn cmd_arcs<F: DocumentFetcher>(graph: &CliGraph<F>, out: &mut impl Write) -> GraphResult<()> {
    let mut progress = ProgressLogger::new("nodes").expected(graph.num_nodes() as u64);
    progress.start("Writing arcs...");
    for node in graph.node_iterator()? {
        let node = node?;
        for succ in &node.successors {
            writeln!(out, "{}\t{}", node.id, succ)?;
        }
        progress.update();
    }
    progress.done();
    Ok(())
}

/// Degree statistics gathered in one pass.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct GraphStats {
    pub nodes: u64,
    pub arcs: u64,
    pub max_outdegree: usize,
    pub avg_outdegree: f64,
    pub dangling: u64,
}

/// Compute [`GraphStats`] with one pass.
pub fn collect_stats<F: DocumentFetcher>(graph: &CliGraph<F>) -> GraphResult<GraphStats> {
    let mut stats = GraphStats::default();
    let mut progress = ProgressLogger::new("nodes").expected(graph.num_nodes() as u64);
    progress.start("Collecting statistics...");

    for node in graph.node_iterator()? {
        let degree = node?.outdegree();
        stats.nodes += 1;
        stats.arcs += degree as u64;
        stats.max_outdegree = stats.max_outdegree.max(degree);
        if degree == 0 {
            stats.dangling += 1;
        }
        progress.update();
    }
    progress.done();

    if stats.nodes > 0 {
        stats.avg_outdegree = stats.arcs as f64 / stats.nodes as f64;
    }
    Ok(stats)
}

/// Print degree statistics.
pub fn cmd_stats<F: DocumentFetcher>(
    graph: &CliGraph<F>,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let stats = collect_stats(graph)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    } else {
        writeln!(out, "Graph: {graph}")?;
        writeln!(out, "Nodes: {}", stats.nodes)?;
        writeln!(out, "Arcs: {}", stats.arcs)?;
        writeln!(out, "Max outdegree: {}", stats.max_outdegree)?;
        writeln!(out, "Avg outdegree: {:.2}", stats.avg_outdegree)?;
        writeln!(out, "Dangling nodes: {}", stats.dangling)?;
    }
    Ok(())
}
