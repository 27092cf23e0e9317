use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rill_parser::parser::Parser;
use rill_report::CapturingReporter;

fn expr(source: &str) {
    let reporter = CapturingReporter::new();
    let mut parser = Parser::new(source, &reporter);
    let ast = parser.parse_expression();
    assert!(ast.is_some());
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| expr(&source)));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "1".to_string();
    for _i in 0..200 {
        source.push_str(" == 2 < 3 + 5 * 5");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| b.iter(|| expr(&source)));
}

criterion_group!(benches, long_expr, stress_precedence);
criterion_main!(benches);
