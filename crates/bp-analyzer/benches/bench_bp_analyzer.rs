use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bp_analyzer::{analyze, classify, shannon_entropy};
use rand::Rng;

fn generate_random(size_kb: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size_kb * 1024).map(|_| rng.gen()).collect()
}

fn generate_text(size_kb: usize) -> Vec<u8> {
    let base = b"The quick brown fox jumps over the lazy dog. ";
    let mut data = Vec::with_capacity(size_kb * 1024);
    while data.len() < size_kb * 1024 {
        data.extend_from_slice(base);
    }
    data.truncate(size_kb * 1024);
    data
}

fn bench_entropy(c: &mut Criterion) {
    let random_64k = generate_random(64);
    let text_64k = generate_text(64);

    c.bench_function("entropy_random_64kb", |b| {
        b.iter(|| black_box(shannon_entropy(black_box(&random_64k))))
    });
    c.bench_function("entropy_text_64kb", |b| {
        b.iter(|| black_box(shannon_entropy(black_box(&text_64k))))
    });
}

fn bench_classify(c: &mut Criterion) {
    let pdf = b"%PDF-1.7\nrest of document".to_vec();
    let unknown = generate_text(1);

    c.bench_function("classify_pdf_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(classify(black_box(&pdf)));
            }
        })
    });
    c.bench_function("classify_unknown_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(classify(black_box(&unknown)));
            }
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let text_10k = generate_text(10);
    c.bench_function("analyze_text_10kb", |b| {
        b.iter(|| black_box(analyze(black_box(&text_10k))))
    });
}

criterion_group!(benches, bench_entropy, bench_classify, bench_analyze);
criterion_main!(benches);
