use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffman_codec::{build_tree, count, decode, derive_code_table, encode};

const SIZES: &[usize] = &[1024, 65536, 1_048_576];

fn get_test_text(size: usize) -> String {
    const SEED: &str = "It was the best of times, it was the worst of times, \
                        it was the age of wisdom, it was the age of foolishness. ";
    SEED.chars().cycle().take(size).collect()
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    for &size in SIZES {
        let text = get_test_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("build", size), &text, |b, text| {
            b.iter(|| build_tree(&count(text)).unwrap());
        });

        let tree = build_tree(&count(&text)).unwrap();
        let table = derive_code_table(&tree);
        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| encode(&table, text).unwrap());
        });

        let encoded = encode(&table, &text).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| decode(&tree, encoded).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_huffman);
criterion_main!(benches);
