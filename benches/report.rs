use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lane_registry::LaneRegistry;

fn populated_registry(segments: usize) -> LaneRegistry {
    let mut registry = LaneRegistry::new();
    for i in 0..segments {
        registry
            .add_segment(&format!("Segment {i}"), 0.5 + i as f64 * 0.1)
            .expect("valid segment");
        if i % 7 == 0 {
            registry
                .update_status(&format!("Segment {i}"), "Closed for maintenance")
                .expect("known segment");
        }
    }
    registry
}

fn benchmark_registry(c: &mut Criterion) {
    let registry = populated_registry(1_000);

    c.bench_function("total_length_1k", |b| {
        b.iter(|| black_box(&registry).total_length());
    });

    c.bench_function("generate_report_1k", |b| {
        b.iter(|| black_box(&registry).generate_report());
    });
}

criterion_group!(benches, benchmark_registry);
criterion_main!(benches);
