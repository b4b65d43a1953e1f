//! Run with: cargo bench -p bele-lib

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use bele_lib::ByteOrder;

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));

    let float = 123.4f64.to_be_bytes();
    group.bench_function("read_float64", |b| {
        b.iter(|| bele_lib::read_float64(black_box(&float), ByteOrder::BigEndian))
    });

    let uint24 = [1u8, 2, 3];
    group.bench_function("read_uint24", |b| {
        b.iter(|| bele_lib::read_uint24(black_box(&uint24), ByteOrder::BigEndian))
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_uint24", |b| {
        let mut out = [0u8; bele_lib::UINT24_SIZE];
        let mut i = 0u32;
        b.iter(|| {
            let _ = bele_lib::put_uint24(&mut out, black_box(i), ByteOrder::BigEndian);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("write_to_stream", |b| {
        let mut out = Vec::with_capacity(bele_lib::UINT64_SIZE);
        b.iter(|| {
            out.clear();
            let _ = bele_lib::write_to_stream(&mut out, black_box(123u64), ByteOrder::BigEndian);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
