/// Benchmarks for the astgraph pipeline.
///
/// Run with: `cargo bench`
///
/// - syn lowering of synthetic Rust sources at several sizes
/// - traversal and graph building over the lowered trees
/// - DOT export of the finished graphs

use astgraph::domain::visualizers::default_registry;
use astgraph::infrastructure::SynSourceParser;
use astgraph::ports::dot_exporter::DotExporter;
use astgraph::ports::SourceParser;
use astgraph::{visualize, AstGraph};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ═══════════════════════════════════════════════════════════════════════════
// Synthetic Data Generators
// ═══════════════════════════════════════════════════════════════════════════

/// Rust source with `num_fns` functions mixing calls, arithmetic and
/// comparisons.
fn synthetic_source(num_fns: usize) -> String {
    let mut src = String::new();
    for i in 0..num_fns {
        src.push_str(&format!(
            "fn f{i}(a: i64, b: i64) -> i64 {{\n\
             \x20   let c = a * {i} + b / 2;\n\
             \x20   if c < b && a >= 0 {{ return f{prev}(c, a - 1); }}\n\
             \x20   helper(c, [a, b, {i}]).len() as i64\n\
             }}\n",
            i = i,
            prev = i.saturating_sub(1),
        ));
    }
    src
}

// ═══════════════════════════════════════════════════════════════════════════
// Pipeline Benchmarks
// ═══════════════════════════════════════════════════════════════════════════

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/parse");

    for num_fns in [10, 100, 500].iter() {
        let src = synthetic_source(*num_fns);
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::new("fns", num_fns), &src, |b, src| {
            b.iter(|| SynSourceParser.parse(black_box(src)).unwrap())
        });
    }

    group.finish();
}

fn bench_visualize(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/visualize");
    let registry = default_registry();

    for num_fns in [10, 100, 500].iter() {
        let tree = SynSourceParser.parse(&synthetic_source(*num_fns)).unwrap();
        let root = tree.root().unwrap();
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(BenchmarkId::new("fns", num_fns), &tree, |b, tree| {
            b.iter(|| {
                let mut graph = AstGraph::new();
                visualize(black_box(tree), root, &registry, &mut graph).unwrap();
                graph
            })
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/export_dot");
    group.sample_size(30);
    let exporter = DotExporter::default();

    let tree = SynSourceParser.parse(&synthetic_source(500)).unwrap();
    let mut graph = AstGraph::new();
    visualize(&tree, tree.root().unwrap(), &default_registry(), &mut graph).unwrap();

    group.throughput(Throughput::Elements(graph.node_count() as u64));
    group.bench_function("fns_500", |b| b.iter(|| exporter.to_dot(black_box(&graph))));

    group.finish();
}

criterion_group!(benches, bench_parse, bench_visualize, bench_export);
criterion_main!(benches);
