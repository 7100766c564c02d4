const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human readable size in base 1024 with one decimal, e.g. `1.2 MB`.
/// A trailing `.0` is dropped (`1 KB`, not `1.0 KB`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.1}", value);
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{} {}", trimmed, UNITS[unit])
}

/// Size in megabytes with exactly one decimal, as shown for sent documents
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}
