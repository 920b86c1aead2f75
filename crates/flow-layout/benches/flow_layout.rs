//! Benchmarks for the flow layout engine.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flow_layout::{ChildBox, Constraint, FlowLayout, LayoutConfig};
use flow_types::geometry::Edges;

/// Generate `n` children of varying size, every seventh one hidden.
fn generate_children(n: usize) -> Vec<ChildBox> {
    (0..n)
        .map(|i| {
            let w = 20 + (i * 37 % 90) as i32;
            let h = 12 + (i * 11 % 24) as i32;
            ChildBox::new(w, h)
                .with_margins(Edges::uniform((i % 4) as i32))
                .with_visible(i % 7 != 6)
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_compute");

    let layout = FlowLayout::new(
        LayoutConfig::new()
            .with_spacing(4, 6)
            .with_padding(Edges::uniform(8)),
    );

    for n in [100, 1000, 10_000] {
        let children = generate_children(n);
        let label = format!("{n}_children");

        group.bench_with_input(
            BenchmarkId::new("narrow", &label),
            &children,
            |b, children| {
                b.iter(|| layout.compute(children, Some(480)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("unbounded", &label),
            &children,
            |b, children| {
                b.iter(|| layout.compute(children, None));
            },
        );
    }

    group.finish();
}

fn bench_resolved(c: &mut Criterion) {
    let layout = FlowLayout::new(LayoutConfig::new().with_spacing(2, 2));
    let children = generate_children(1000);

    c.bench_function("flow_layout_at_most", |b| {
        b.iter(|| layout.layout(&children, Constraint::AtMost(480), Constraint::AtMost(272)));
    });
}

criterion_group!(benches, bench_compute, bench_resolved);
criterion_main!(benches);
