use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use discord_snowflake::Snowflake;

// Number of IDs decoded per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn fixture() -> Vec<Snowflake> {
    (0..TOTAL_IDS as u64)
        .map(|i| {
            let worker_id = (i % 32) as u8;
            Snowflake::from_components(41_944_705_796 + i, worker_id, 0, (i % 4096) as u16)
        })
        .collect()
}

fn bench_from_string(c: &mut Criterion) {
    let strings: Vec<String> = fixture().iter().map(ToString::to_string).collect();

    let mut group = c.benchmark_group("from_string");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for s in &strings {
                black_box(Snowflake::from_string(black_box(s)).ok());
            }
        })
    });
    group.finish();
}

fn bench_to_string(c: &mut Criterion) {
    let ids = fixture();

    let mut group = c.benchmark_group("to_string");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for id in &ids {
                black_box(black_box(id).to_string());
            }
        })
    });
    group.finish();
}

fn bench_decode_fields(c: &mut Criterion) {
    let ids = fixture();

    let mut group = c.benchmark_group("decode_fields");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter(|| {
            for id in &ids {
                let id = black_box(id);
                black_box((id.unix(), id.worker_id(), id.process_id(), id.increment()));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_from_string,
    bench_to_string,
    bench_decode_fields
);
criterion_main!(benches);
