const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format bytes into human-readable string with two decimals.
///
/// Units step by 1024 from B up to TB; anything past the TB range is
/// reported in PB, which is the largest unit.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} PB", value)
}
