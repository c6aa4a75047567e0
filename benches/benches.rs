use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;

use mps4264::layout::FRAME_LEN;

fn synthetic_capture(num_frames: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..num_frames * FRAME_LEN).map(|_| rng.gen()).collect()
}

fn bench_decode_compact(c: &mut Criterion) {
    let dat = synthetic_capture(1024);
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(dat.len() as u64));
    group.bench_function("compact", |b| {
        b.iter(|| {
            let scan = mps4264::decode_compact(&dat).unwrap();
            assert_eq!(scan.len(), 1024);
        });
    });
    group.finish();
}

fn bench_decode_full(c: &mut Criterion) {
    let dat = synthetic_capture(1024);
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(dat.len() as u64));
    group.bench_function("full", |b| {
        b.iter(|| {
            let table = mps4264::decode_full(&dat).unwrap();
            assert_eq!(table.len(), 1024);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decode_compact, bench_decode_full);
criterion_main!(benches);
