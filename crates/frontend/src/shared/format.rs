//! Human-readable sizes for file-selection messages.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Binary multiples, two decimals with trailing zeros dropped:
/// `1536` -> `"1.5 KB"`, `10 * 1024 * 1024` -> `"10 MB"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, UNITS[unit])
}
