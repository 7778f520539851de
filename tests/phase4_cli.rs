//! Phase 4 tests: CLI commands over a document dump.

use std::io::Write;

use tempfile::NamedTempFile;

use linkgraph::cli::commands::{
    cmd_arcs, cmd_info, cmd_nodes, cmd_stats, collect_stats, open_dump, GraphStats,
};
use linkgraph::types::GraphError;

const DUMP: &str = r#"{"docs": [
    {"url": "http://a/", "outlinks": ["http://b/", "http://c/"]},
    {"url": "http://b/", "outlinks": ["http://c/", "http://external/"]},
    {"url": "http://c/", "outlinks": ["http://a/"]},
    {"url": "http://d/"}
]}"#;

fn dump_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DUMP.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_info_text_and_json() {
    let file = dump_file();
    let graph = open_dump(file.path(), 3).unwrap();

    let text = output(|out| cmd_info(&graph, false, out).unwrap());
    assert!(text.contains(&format!("Graph: SolrWebGraph({})", file.path().display())));
    assert!(text.contains("Nodes: 4"));

    let json = output(|out| cmd_info(&graph, true, out).unwrap());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["nodes"], 4);
}

#[test]
fn test_arcs_lists_every_resolved_link() {
    let file = dump_file();
    let graph = open_dump(file.path(), 2).unwrap();
    let arcs = output(|out| cmd_arcs(&graph, out).unwrap());
    assert_eq!(arcs, "0\t1\n0\t2\n1\t2\n2\t0\n");
}

#[test]
fn test_nodes_with_limit() {
    let file = dump_file();
    let graph = open_dump(file.path(), 10).unwrap();

    let text = output(|out| cmd_nodes(&graph, Some(2), false, out).unwrap());
    assert_eq!(text, "0\thttp://a/\t[1,2]\n1\thttp://b/\t[2]\n");

    let json = output(|out| cmd_nodes(&graph, None, true, out).unwrap());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 4);
    assert_eq!(value[3]["url"], "http://d/");
    assert_eq!(value[3]["successors"], serde_json::json!([]));
}

#[test]
fn test_stats() {
    let file = dump_file();
    let graph = open_dump(file.path(), 1).unwrap();
    let stats = collect_stats(&graph).unwrap();
    assert_eq!(
        stats,
        GraphStats {
            nodes: 4,
            arcs: 4,
            max_outdegree: 2,
            avg_outdegree: 1.0,
            dangling: 1,
        }
    );

    let text = output(|out| cmd_stats(&graph, false, out).unwrap());
    assert!(text.contains("Dangling nodes: 1"));
}

#[test]
fn test_missing_dump_is_io_error() {
    let file = dump_file();
    let missing = file.path().with_extension("gone");
    assert!(matches!(open_dump(&missing, 10), Err(GraphError::Io(_))));
}
