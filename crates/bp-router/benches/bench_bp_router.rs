use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bp_core::PayloadFeatures;
use bp_router::{default_rules, select_with_rules};

fn features(media_type: &str) -> PayloadFeatures {
    PayloadFeatures {
        media_type: media_type.to_string(),
        size_bytes: 65536,
        entropy_bits: 5.5,
    }
}

fn bench_selection(c: &mut Criterion) {
    let rules = default_rules();
    let first = features("application/pdf");
    let fallthrough = features("application/octet-stream");

    c.bench_function("select_first_rule_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(select_with_rules(black_box(&first), &rules));
            }
        })
    });

    c.bench_function("select_fallthrough_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(select_with_rules(black_box(&fallthrough), &rules));
            }
        })
    });
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
