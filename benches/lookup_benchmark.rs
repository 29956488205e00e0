use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use greffe_index::index::{compress_greffe_data, find_greffe, PostalCodeMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Dataset shaped like the production mapping: ~6000 codes in runs over
/// ~300 greffes.
fn build_map() -> PostalCodeMap {
    let mut rng = StdRng::seed_from_u64(7);
    let mut map = PostalCodeMap::new();

    let mut code = 1000u32;
    while map.len() < 6000 && code < 99999 {
        let greffe = format!("GREFFE-{:03}", rng.random_range(0..300u32));
        let run_len = rng.random_range(1..30u32);
        for _ in 0..run_len {
            map.insert(format!("{:05}", code), greffe.clone());
            code += 1;
        }
        code += rng.random_range(0..10u32);
    }

    map
}

fn bench_compressed_lookup(c: &mut Criterion) {
    let map = build_map();
    let index = compress_greffe_data(&map);
    let codes: Vec<String> = map.keys().cloned().collect();

    c.bench_function("compressed_lookup_hit", |b| {
        let mut i = 0;
        b.iter(|| {
            let code = &codes[i % codes.len()];
            i += 1;
            black_box(find_greffe(black_box(code), &index))
        })
    });

    c.bench_function("compressed_lookup_miss", |b| {
        b.iter(|| black_box(find_greffe(black_box("00042"), &index)))
    });
}

fn bench_flat_lookup(c: &mut Criterion) {
    let map = build_map();
    let codes: Vec<String> = map.keys().cloned().collect();

    c.bench_function("flat_lookup_hit", |b| {
        let mut i = 0;
        b.iter(|| {
            let code = &codes[i % codes.len()];
            i += 1;
            black_box(map.get(black_box(code.as_str())))
        })
    });
}

fn bench_compress(c: &mut Criterion) {
    let map = build_map();

    c.bench_function("compress_6000_entries", |b| {
        b.iter(|| black_box(compress_greffe_data(black_box(&map))))
    });
}

criterion_group!(
    benches,
    bench_compressed_lookup,
    bench_flat_lookup,
    bench_compress
);
criterion_main!(benches);
