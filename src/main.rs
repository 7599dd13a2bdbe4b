//! Hermes Frame - pack/unpack latency demo
//!
//! Usage:
//!   cargo run --release -- --iterations 100000
//!   cargo run --release -- --storage /dev/shm/hermes_frame.dat

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hermes_frame::core::{FrameBuffer, FrameStore, MmapFrameBuffer};
use hermes_frame::protocol::{SampleRecord, SAMPLE_DATA_SIZE};
use hermes_frame::FrameConfig;

const MAGIC: i32 = 0x12345678;

/// Hermes Frame - fixed-layout frame packer benchmark
#[derive(Parser, Debug)]
#[command(name = "hermes_frame")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override buffer capacity (bytes, including 8-byte header)
    #[arg(long)]
    capacity: Option<usize>,

    /// Override mmap storage path
    #[arg(short, long)]
    storage: Option<PathBuf>,

    /// Iterations per benchmark
    #[arg(short, long, default_value = "100000")]
    iterations: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let mut config = match &args.config {
        Some(path) => FrameConfig::load(path)?,
        None => FrameConfig::default(),
    };
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(storage) = args.storage {
        config.storage_path = Some(storage);
    }
    config.validate()?;

    println!("🚀 Hermes Frame - Pack/Unpack Benchmark");
    println!("=======================================\n");
    info!(
        capacity = config.capacity,
        max_payload = config.max_payload(),
        iterations = args.iterations,
        "configuration loaded"
    );

    // Payload penuh, sama seperti kasus terburuk
    let payload = vec![b'b'; config.max_payload()];

    let mut heap = FrameBuffer::new(config.capacity);
    benchmark_frame("Heap Frame Buffer", &mut heap, &payload, args.iterations)?;

    if let Some(path) = &config.storage_path {
        let mut mapped = MmapFrameBuffer::open(path, config.capacity)?;
        benchmark_frame("Mmap Frame Buffer", &mut mapped, &payload, args.iterations)?;
        mapped.flush()?;
    }

    benchmark_sample(args.iterations)?;

    println!("\n✅ All benchmarks complete!");
    Ok(())
}

fn benchmark_frame<S: FrameStore>(
    label: &str,
    store: &mut S,
    payload: &[u8],
    iterations: usize,
) -> anyhow::Result<()> {
    println!("📊 {} ({} byte payload)", label, payload.len());
    println!("{}", "-".repeat(label.len() + 24));

    let length = i32::try_from(payload.len())?;

    let start = Instant::now();
    for _ in 0..iterations {
        store.encode(MAGIC, length, payload)?;
    }
    let pack_duration = start.elapsed();

    let start = Instant::now();
    for _ in 0..iterations {
        let frame = store.decode_ref()?;
        std::hint::black_box(frame);
    }
    let unpack_duration = start.elapsed();

    print_latency("Pack", pack_duration, iterations);
    print_latency("Unpack", unpack_duration, iterations);
    println!(
        "  Pack throughput: {:.2} MB/sec\n",
        (iterations * payload.len()) as f64 / pack_duration.as_secs_f64() / 1_000_000.0
    );

    Ok(())
}

fn benchmark_sample(iterations: usize) -> anyhow::Result<()> {
    println!("📊 Sample Record ({} byte data)", SAMPLE_DATA_SIZE);
    println!("------------------------------------");

    let data = vec![b'b'; SAMPLE_DATA_SIZE];

    let start = Instant::now();
    let mut encoded = Vec::new();
    for i in 0..iterations {
        encoded = SampleRecord::encode(i as u32, MAGIC as u32, &data)?;
    }
    let encode_duration = start.elapsed();

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(SampleRecord::decode(&encoded)?);
    }
    let decode_duration = start.elapsed();

    print_latency("Encode", encode_duration, iterations);
    print_latency("Decode", decode_duration, iterations);
    Ok(())
}

fn print_latency(label: &str, duration: Duration, iterations: usize) {
    let ns = duration.as_nanos() as f64 / iterations.max(1) as f64;
    println!(
        "  {:<7} latency: {:.2} ns/op ({:.3} μs/op)",
        label,
        ns,
        ns / 1000.0
    );
}
