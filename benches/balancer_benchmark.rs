//! Balancer benchmark: measure full rebalances at each breakpoint.
//!
//! Every list or width change triggers a full pass, so this is the cost
//! paid per resize event.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wingrade::{ColumnBalancer, Vdi};

/// Create VDIs with varied address lengths.
fn create_vdis(count: usize) -> Vec<Vdi> {
    (0..count)
        .map(|i| {
            let address = match i % 4 {
                0 => format!("10.0.{}.{}", i / 256 % 256, i % 256),
                1 => format!("vdi-{i}.corp.local"),
                2 => format!("desk{i}"),
                _ => format!("win10-build-{i}.ci.eu-west.corp.local"),
            };
            Vdi::new(address, "admin", "CORP")
        })
        .collect()
}

fn balance_by_width(c: &mut Criterion) {
    let balancer = ColumnBalancer::<Vdi>::for_resources();
    let vdis = create_vdis(500);

    let mut group = c.benchmark_group("balance_500");
    for width in [500.0, 800.0, 1000.0, 1400.0] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| balancer.plan(black_box(&vdis), black_box(width)));
        });
    }
    group.finish();
}

fn balance_by_count(c: &mut Criterion) {
    let balancer = ColumnBalancer::<Vdi>::for_resources();

    let mut group = c.benchmark_group("balance_wide");
    for count in [10, 100, 1_000, 10_000] {
        let vdis = create_vdis(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &vdis, |b, vdis| {
            b.iter(|| balancer.layout(black_box(vdis), 1400.0));
        });
    }
    group.finish();
}

criterion_group!(benches, balance_by_width, balance_by_count);
criterion_main!(benches);
