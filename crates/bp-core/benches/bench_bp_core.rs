use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bp_core::config::BytePressConfig;
use bp_core::types::PipelineKind;

fn bench_config_parsing(c: &mut Criterion) {
    let json_str = serde_json::to_string(&BytePressConfig::default()).unwrap();
    c.bench_function("config_parse_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let cfg: BytePressConfig = serde_json::from_str(black_box(&json_str)).unwrap();
                black_box(cfg);
            }
        })
    });

    c.bench_function("config_serialize_1000", |b| {
        let cfg = BytePressConfig::default();
        b.iter(|| {
            for _ in 0..1000 {
                black_box(serde_json::to_string(black_box(&cfg)).unwrap());
            }
        })
    });
}

fn bench_kind_resolution(c: &mut Criterion) {
    let names = ["pdf_pipeline", "image_pipeline", "audio_pipeline", "generic_pipeline", "unknown"];
    c.bench_function("kind_from_name_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                for name in names {
                    black_box(PipelineKind::from_name(black_box(name)));
                }
            }
        })
    });
}

criterion_group!(benches, bench_config_parsing, bench_kind_resolution);
criterion_main!(benches);
