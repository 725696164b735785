//! Ringview - Demo & Micro-Benchmark
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Log level diatur lewat `RUST_LOG`, atau `--verbose` untuk debug.

use std::time::Instant;

use ringview::core::{CircularBuffer, SharedCircularBuffer};
use ringview::RingError;

/// Demo configuration
struct DemoConfig {
    message: String,
    bench: bool,
    iterations: usize,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            message: "Hello World!".to_string(),
            bench: false,
            iterations: 1_000_000,
            verbose: false,
        }
    }
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--message" | "-m" => {
                if i + 1 < args.len() {
                    config.message = args[i + 1].clone();
                    i += 1;
                }
            }
            "--bench" | "-b" => {
                config.bench = true;
            }
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Ringview - Fixed-Capacity Ring Buffer Demo\n");
                println!("Usage: ringview [OPTIONS]\n");
                println!("Options:");
                println!("  -m, --message <TEXT>    Text to push through a 16-slot buffer (default: Hello World!)");
                println!("  -b, --bench             Run latency micro-benchmark");
                println!("  -n, --iterations <N>    Benchmark iterations (default: 1000000)");
                println!("  -v, --verbose           Debug logging");
                println!("  -h, --help              Show this help");
                std::process::exit(0);
            }
            other => {
                eprintln!("⚠️  Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    config
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let config = parse_args();
    init_logging(config.verbose);

    log::debug!(
        "config: message={:?} bench={} iterations={}",
        config.message,
        config.bench,
        config.iterations
    );

    println!("🌀 Ringview - Fixed-Capacity Ring Buffer");
    println!("=========================================\n");

    demo_message(&config.message);
    demo_wraparound();

    if config.bench {
        benchmark_circular_buffer(config.iterations);
        benchmark_shared_buffer(config.iterations);
    }

    println!("\n✅ Done!");
}

fn demo_message(message: &str) {
    println!("📨 Message Round-Trip (16 slots)");
    println!("--------------------------------");

    let mut rb: CircularBuffer<char, 16> = CircularBuffer::new();

    match rb.write_all(message.chars()) {
        Ok(n) => println!("  Written: {} chars", n),
        Err(e @ RingError::Overflow { .. }) => {
            eprintln!("  ⚠️  {} - message truncated", e);
        }
        Err(e) => eprintln!("  ❌ {}", e),
    }

    let out: String = rb.read_all().iter().collect();
    println!("  Read back: {:?}\n", out);
}

fn demo_wraparound() {
    println!("🔁 Wraparound (4 slots)");
    println!("-----------------------");

    let mut rb: CircularBuffer<u8, 4> = CircularBuffer::new();

    if let Err(e) = rb.write_all([0x01, 0x02, 0x03]) {
        eprintln!("  ❌ {}", e);
        return;
    }
    let first: Vec<u8> = rb.read(2).iter().copied().collect();
    println!("  Read(2): {:?}", first);

    if let Err(e) = rb.write_all([0x04, 0x05, 0x06]) {
        eprintln!("  ❌ {}", e);
        return;
    }

    println!("\n{:x}", rb.dump());

    let (head, tail) = rb.iter().as_slices();
    println!("  Physical halves: {:?} + {:?}", head, tail);
    println!("  Logical order:   {:?}\n", rb.read_all());
}

fn benchmark_circular_buffer(iterations: usize) {
    println!("📊 CircularBuffer Benchmark (unsynchronized)");
    println!("--------------------------------------------");

    let mut rb: CircularBuffer<u64, 65536> = CircularBuffer::new();

    // Warm up
    for i in 0..1000 {
        let _ = rb.write(i);
    }
    let _ = rb.read_all();

    // Benchmark write
    let start = Instant::now();
    for i in 0..iterations {
        if rb.write(i as u64).is_err() {
            let _ = rb.read(1);
            let _ = rb.write(i as u64);
        }
    }
    let write_duration = start.elapsed();

    rb.clear();
    let _ = rb.write_all(0..rb.size() as u64);

    // Benchmark read (1 elemen per call, refill saat kosong)
    let start = Instant::now();
    let mut checksum = 0u64;
    for i in 0..iterations {
        let head = rb.read(1).first().copied();
        match head {
            Some(v) => checksum = checksum.wrapping_add(v),
            None => {
                let _ = rb.write(i as u64);
            }
        }
    }
    let read_duration = start.elapsed();

    print_latency(iterations, write_duration, read_duration);
    log::debug!("read checksum: {}", checksum);
}

fn benchmark_shared_buffer(iterations: usize) {
    println!("📊 SharedCircularBuffer Benchmark (Mutex per op)");
    println!("------------------------------------------------");

    let rb: SharedCircularBuffer<u64, 65536> = SharedCircularBuffer::new();

    let start = Instant::now();
    for i in 0..iterations {
        if rb.write(i as u64).is_err() {
            rb.pop();
            let _ = rb.write(i as u64);
        }
    }
    let write_duration = start.elapsed();

    let start = Instant::now();
    for i in 0..iterations {
        if rb.pop().is_none() {
            let _ = rb.write(i as u64);
        }
    }
    let read_duration = start.elapsed();

    print_latency(iterations, write_duration, read_duration);
}

fn print_latency(
    iterations: usize,
    write_duration: std::time::Duration,
    read_duration: std::time::Duration,
) {
    let write_ns = write_duration.as_nanos() as f64 / iterations as f64;
    let read_ns = read_duration.as_nanos() as f64 / iterations as f64;

    println!("  Operations: {}", iterations);
    println!(
        "  Write latency: {:.2} ns/op ({:.3} μs/op)",
        write_ns,
        write_ns / 1000.0
    );
    println!(
        "  Read latency:  {:.2} ns/op ({:.3} μs/op)",
        read_ns,
        read_ns / 1000.0
    );
    println!(
        "  Throughput:    {:.2} M ops/sec\n",
        iterations as f64 / write_duration.as_secs_f64() / 1_000_000.0
    );
}
