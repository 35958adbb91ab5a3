//! Byte and text inspection helpers used by the validator.

/// Units used by [`format_size`], base 1024.
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];

/// Check whether the first `check_len` bytes contain a null byte.
#[must_use]
pub fn is_binary(bytes: &[u8], check_len: usize) -> bool {
    let end = bytes.len().min(check_len);
    bytes[..end].contains(&0)
}

/// Count lines as the number of `\n` characters plus one.
///
/// Empty text has zero lines. Text ending in `\n` counts the empty
/// trailing line too, so `"a\n"` is two lines.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Format bytes to a human-readable size with one decimal place.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", SIZE_UNITS[unit])
}

/// Render an integer with `,` thousands separators.
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
