// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};
use wildcard::compile;

// local imports
use super::ND;

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let group = format!("{}{}compile", super::GROUP, ND);
    let mut c = c.benchmark_group(group);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("literal", "SOME_VERY_VERY_LONG_LITERAL_PATTERN".to_string()),
        ("mixed", "m*iss*pi?x\\*y".repeat(8)),
        ("stars", "*".repeat(64)),
    ];

    for (name, pattern) in &variants {
        c.throughput(Throughput::Bytes(pattern.len() as u64));
        c.bench_function(BenchmarkId::new("compile", name), |b| {
            b.iter(|| compile(black_box(pattern)));
        });
    }
}
