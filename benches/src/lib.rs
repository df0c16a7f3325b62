//! Benchmark utilities for dryscan.

/// Builds a synthetic `dbt ls` listing with the given number of model
/// lines, interleaved with the log noise dbt prints around them.
pub fn synthetic_listing(models: usize) -> String {
    let mut listing = String::from("12:30:01  Running with dbt=1.7.4\n");
    for i in 0..models {
        listing.push_str(&format!("analytics.staging.stg_model_{i:04}\n"));
    }
    listing.push_str("Done.\n");
    listing
}

/// Byte counts spread across the KB through TB ranges.
pub fn synthetic_sizes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 12_345.0 * 1024_f64.powi((i % 4) as i32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_listing_line_count() {
        let listing = synthetic_listing(10);
        assert_eq!(listing.lines().count(), 12);
    }

    #[test]
    fn test_synthetic_sizes_cycle_units() {
        let sizes = synthetic_sizes(4);
        assert_eq!(sizes[0], 12_345.0);
        assert_eq!(sizes[1], 12_345.0 * 1024.0);
    }
}
