// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};
use wildcard::{Strategy, compile};
use wildmatch::WildMatch;

// local imports
use super::ND;

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let group = format!("{}{}strategy", super::GROUP, ND);
    let mut c = c.benchmark_group(group);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let variants = [
        ("short", "mississippi".to_string(), "m*iss*pi".to_string(), true),
        ("sparse", "ab".repeat(32), "*a*b*".to_string(), true),
        ("near-miss", "a".repeat(24), "a*a*a*a*ab".to_string(), false),
        ("dense", "a".repeat(256), format!("*{}", "a".repeat(255)), true),
    ];

    for strategy in Strategy::all() {
        for (name, text, pattern, expected) in &variants {
            let tokens = compile(pattern).tokens;
            let routine = || strategy.matches(black_box(text), black_box(&tokens));

            assert_eq!(routine(), *expected, "{} on {}", strategy, name);

            c.throughput(Throughput::Bytes(text.len() as u64));
            c.bench_function(BenchmarkId::new(strategy.name(), name), |b| b.iter(routine));
        }
    }

    // baseline
    for (name, text, pattern, expected) in &variants {
        let pattern = WildMatch::new(pattern);
        let routine = || black_box(&pattern).matches(black_box(text));

        assert_eq!(routine(), *expected, "wildmatch on {}", name);

        c.throughput(Throughput::Bytes(text.len() as u64));
        c.bench_function(BenchmarkId::new("wildmatch", name), |b| b.iter(routine));
    }
}
