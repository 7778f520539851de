//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use linkgraph::types::LinkDocument;

/// Solr stored fields for `doc`.
pub fn solr_fields(doc: &LinkDocument) -> serde_json::Value {
    serde_json::json!({"url": doc.url, "outlinks": doc.outlinks})
}

/// Serve `docs` from a Solr lookalike, honouring `start` and `rows`.
///
/// Documents are raw stored-field objects so tests can serve malformed ones.
/// Returns the core URL without a trailing slash.
pub fn spawn_solr(docs: Vec<serde_json::Value>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            loop {
                let mut header = String::new();
                match reader.read_line(&mut header) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if header == "\r\n" => break,
                    Ok(_) => {}
                }
            }

            let param = |name: &str| -> usize {
                request_line
                    .split(|c| c == '?' || c == '&' || c == ' ')
                    .find_map(|kv| kv.strip_prefix(&format!("{name}=")))
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0)
            };
            let start = param("start").min(docs.len());
            let end = (start + param("rows")).min(docs.len());
            let body = serde_json::json!({
                "responseHeader": {"status": 0},
                "response": {"numFound": docs.len(), "start": start, "docs": &docs[start..end]},
            })
            .to_string();

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}/solr")
}
