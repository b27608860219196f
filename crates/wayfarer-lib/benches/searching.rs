use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

use wayfarer_lib::test_helpers::{sample_graph, sample_heuristic};
use wayfarer_lib::{plan_search, Graph, SearchRequest};

static GRAPH: Lazy<Graph<String>> = Lazy::new(sample_graph);
static DFS_REQUEST: Lazy<SearchRequest<String>> =
    Lazy::new(|| SearchRequest::depth_first("A".to_string(), "G".to_string()));
static BFS_REQUEST: Lazy<SearchRequest<String>> =
    Lazy::new(|| SearchRequest::breadth_first("A".to_string(), "H".to_string()));
static BEST_FIRST_REQUEST: Lazy<SearchRequest<String>> =
    Lazy::new(|| SearchRequest::best_first("A".to_string(), "H".to_string(), sample_heuristic()));

fn benchmark_searching(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("dfs_a_g", |b| {
        let request = &*DFS_REQUEST;
        b.iter(|| {
            let plan = plan_search(graph, request).expect("path exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("bfs_a_h", |b| {
        let request = &*BFS_REQUEST;
        b.iter(|| {
            let plan = plan_search(graph, request).expect("path exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("best_first_a_h", |b| {
        let request = &*BEST_FIRST_REQUEST;
        b.iter(|| {
            let plan = plan_search(graph, request).expect("path exists");
            black_box(plan.steps.len())
        });
    });
}

criterion_group!(benches, benchmark_searching);
criterion_main!(benches);
