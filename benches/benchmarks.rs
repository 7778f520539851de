//! Criterion benchmarks for linkgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use linkgraph::graph::{ImmutableSequentialGraph, SequentialLinkGraph};
use linkgraph::source::{DocumentSet, SolrWebGraph};
use linkgraph::types::LinkDocument;

/// Build a random link graph with `links_per_page` outlinks per document.
fn make_documents(page_count: usize, links_per_page: usize) -> DocumentSet {
    let mut rng = rand::thread_rng();
    let docs = (0..page_count)
        .map(|i| {
            let outlinks = (0..links_per_page)
                .map(|_| format!("http://site{}/", rng.gen_range(0..page_count)))
                .collect();
            LinkDocument::new(format!("http://site{}/", i), outlinks)
        })
        .collect();
    DocumentSet::new("bench", docs)
}

fn bench_prime_10k(c: &mut Criterion) {
    let docs = make_documents(10_000, 10);
    c.bench_function("prime_10k_pages", |b| {
        b.iter(|| {
            let graph =
                SequentialLinkGraph::new(SolrWebGraph::with_fetcher(docs.clone(), 1000)).unwrap();
            assert_eq!(graph.num_nodes(), 10_000);
        });
    });
}

fn bench_iterate_primed_100k(c: &mut Criterion) {
    let docs = make_documents(100_000, 10);
    let graph = SequentialLinkGraph::new(SolrWebGraph::with_fetcher(docs, 1000)).unwrap();
    c.bench_function("iterate_primed_100k_pages", |b| {
        b.iter(|| graph.num_arcs().unwrap());
    });
}

criterion_group!(benches, bench_prime_10k, bench_iterate_primed_100k);
criterion_main!(benches);
