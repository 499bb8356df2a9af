//! Human-readable byte sizes.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with binary (base-1024) units.
///
/// The largest unit keeping the value at or above 1 is chosen, capped at GB,
/// and the value is rounded to two decimals without trailing zeros.
///
/// ```
/// use fileshare::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // floor(log1024(bytes)): every 10 bits is one unit step
    let exponent = ((63 - bytes.leading_zeros()) / 10).min(UNITS.len() as u32 - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
    }

    #[test]
    fn test_small_sizes_stay_in_bytes() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_two_decimal_rounding() {
        // 1234 / 1024 = 1.20507...
        assert_eq!(format_size(1234), "1.21 KB");
        // 5.5 MB
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_gigabytes_are_the_largest_unit() {
        let two_tib = 2u64 * 1024 * 1024 * 1024 * 1024;
        assert_eq!(format_size(two_tib), "2048 GB");
        assert!(format_size(u64::MAX).ends_with(" GB"));
    }

    #[test]
    fn test_displayed_value_in_unit_range() {
        for bytes in [1u64, 999, 1024, 4096, 777_777, 50 * 1024 * 1024, 1 << 35] {
            let formatted = format_size(bytes);
            let (value, unit) = formatted.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            assert!(UNITS.contains(&unit), "{formatted}");
            assert!((1.0..=1024.0).contains(&value), "{formatted}");
        }
    }
}
