// Run with: cargo run -p foldscan-core --example debug_scan -- /path/to/scan [ext]

use foldscan_core::{ScanConfig, Scanner, format_size, render};
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = ScanConfig::default().with_skip_unreadable(true);
    if let Some(ext) = args.next() {
        config = config.with_extension(&ext);
    }

    let scanner = Scanner::new(config);
    println!(
        "Scanning: {:?} (filter: {:?})",
        path,
        scanner.config().extension_filter
    );

    let start = Instant::now();
    let stats = match scanner.scan(&path) {
        Ok(stats) => stats,
        Err(e) => {
            println!("ERROR: {}", e);
            return;
        }
    };
    println!("[{:>6.3}s] COMPLETED", start.elapsed().as_secs_f64());

    for (ext, bucket) in stats.file_types.iter() {
        println!(
            "  bucket {:<20} count={:<8} bytes={:<12} ({})",
            ext,
            bucket.count,
            bucket.size,
            format_size(bucket.size)
        );
    }
    println!(
        "files={} bytes={} skipped={} largest={:?}",
        stats.total_files, stats.total_size, stats.skipped_entries, stats.largest_file
    );

    match stats.check_invariants() {
        Ok(()) => println!("invariants: ok"),
        Err(e) => println!("invariants: VIOLATED: {}", e),
    }

    println!("\n{}", render(&stats));
}
