//! Human-readable size formatting.

use dryscan_types::ScanEstimate;

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;

/// Formats a byte count with the largest unit keeping the scaled value
/// below 1000, using binary divisors and two decimals.
///
/// Units stop at TB; anything at or above 1000 TB still renders as TB.
/// Zero renders as `"0.00 KB"`.
#[must_use]
pub fn format_bytes(raw_bytes: f64) -> String {
    if raw_bytes / KB < 1000.0 {
        format!("{:.2} KB", raw_bytes / KB)
    } else if raw_bytes / MB < 1000.0 {
        format!("{:.2} MB", raw_bytes / MB)
    } else if raw_bytes / GB < 1000.0 {
        format!("{:.2} GB", raw_bytes / GB)
    } else {
        format!("{:.2} TB", raw_bytes / TB)
    }
}

/// Formats a scan estimate: the byte count for a successful estimate, the
/// literal `"ERROR"` for a failed one.
#[must_use]
pub fn format_scan_size(estimate: &ScanEstimate) -> String {
    match estimate.bytes() {
        Some(bytes) => format_bytes(bytes as f64),
        None => "ERROR".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_kb() {
        assert_eq!(format_bytes(0.0), "0.00 KB");
    }

    #[test]
    fn test_binary_divisor_and_rounding() {
        // 12345 / 1024 = 12.0556.. -> 12.06
        assert_eq!(format_bytes(12_345.0), "12.06 KB");
    }

    #[test]
    fn test_megabyte_range() {
        assert_eq!(format_bytes(12_345_678.0), "11.77 MB");
    }

    #[test]
    fn test_gigabyte_range() {
        assert_eq!(format_bytes(2_147_483_648.0), "2.00 GB");
    }

    #[test]
    fn test_unit_boundaries() {
        // Just below 1000 KB stays KB; at 1000 KB switches to MB.
        assert_eq!(format_bytes(1000.0 * 1024.0 - 1024.0), "999.00 KB");
        assert_eq!(format_bytes(1000.0 * 1024.0), "0.98 MB");
    }

    #[test]
    fn test_no_unit_above_tb() {
        assert_eq!(format_bytes(999_345_678_901_234_000.0), "908899.60 TB");
    }

    #[test]
    fn test_scan_size_success() {
        assert_eq!(format_scan_size(&ScanEstimate::Scanned(3072)), "3.00 KB");
    }

    #[test]
    fn test_scan_size_failure_is_error() {
        let estimate = ScanEstimate::failed("Syntax error at [1:8]");
        assert_eq!(format_scan_size(&estimate), "ERROR");
    }
}
