//! Criterion benchmark untuk CircularBuffer
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ringview::core::{CircularBuffer, SharedCircularBuffer};

fn bench_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_buffer");
    group.throughput(Throughput::Elements(1));

    // Benchmark write
    group.bench_function("write", |b| {
        let mut rb: CircularBuffer<u64, 65536> = CircularBuffer::new();
        let mut i = 0u64;
        b.iter(|| {
            if rb.write(black_box(i)).is_err() {
                let _ = rb.read(1);
                let _ = rb.write(black_box(i));
            }
            i = i.wrapping_add(1);
        });
    });

    // Benchmark pop
    group.bench_function("pop", |b| {
        let mut rb: CircularBuffer<u64, 65536> = CircularBuffer::new();
        // Pre-fill
        let _ = rb.write_all(0..32768);
        b.iter(|| {
            if let Some(v) = rb.pop() {
                let _ = rb.write(black_box(v));
            }
        });
    });

    // Benchmark write+read cycle
    group.bench_function("write_read_cycle", |b| {
        let mut rb: CircularBuffer<u64, 65536> = CircularBuffer::new();
        let mut i = 0u64;
        b.iter(|| {
            let _ = rb.write(black_box(i));
            black_box(rb.read(1).first().copied());
            i = i.wrapping_add(1);
        });
    });

    // Benchmark shared write+pop cycle (Mutex per op)
    group.bench_function("shared_write_pop_cycle", |b| {
        let rb: SharedCircularBuffer<u64, 65536> = SharedCircularBuffer::new();
        let mut i = 0u64;
        b.iter(|| {
            let _ = rb.write(black_box(i));
            black_box(rb.pop());
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");

    for batch_size in [100usize, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("batch_{}", batch_size), |b| {
            let mut rb: CircularBuffer<u64, 65536> = CircularBuffer::new();
            // Geser cursor supaya batch melewati ujung array
            let _ = rb.write_all(0..60000);
            let _ = rb.read_all();
            b.iter(|| {
                let _ = rb.write_all((0..*batch_size as u64).map(black_box));
                let sum: u64 = rb.read_all().iter().sum();
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_read, bench_bulk);
criterion_main!(benches);
