//! Byte-size formatting

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

const STEP: u128 = 1024;

/// Upper bound on decimal places
const MAX_DECIMALS: i32 = 100;

/// Format a byte count with two decimal places at most
pub fn format_size(bytes: u64) -> String {
    format_size_units(bytes, 2)
}

/// Format a byte count using binary (1024) units
///
/// The value is rounded half away from zero to `decimals` places and trailing
/// zeros are dropped. `decimals` is clamped to `0..=100`.
///
/// # Examples
///
/// ```
/// use sfadmin_utils::format_size_units;
///
/// assert_eq!(format_size_units(0, 2), "0 Bytes");
/// assert_eq!(format_size_units(1024, 2), "1 KB");
/// assert_eq!(format_size_units(1234, 2), "1.21 KB");
/// assert_eq!(format_size_units(1234, 3), "1.205 KB");
/// ```
pub fn format_size_units(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let index = unit_index(bytes);
    let scaled = bytes as f64 / (STEP.pow(index as u32) as f64);

    // f64 Display drops the trailing zeros
    format!("{} {}", round_half_up(scaled, decimals), UNITS[index])
}

/// Round a non-negative value to `decimals` places, ties going up
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals.clamp(0, MAX_DECIMALS));
    let shifted = value * factor;

    // Past 2^52 every f64 is already an integer
    if shifted < 2f64.powi(52) {
        shifted.round() / factor
    } else {
        value
    }
}

/// floor(log1024(bytes)) without float error at exact powers of 1024
fn unit_index(bytes: u64) -> usize {
    let bytes = bytes as u128;
    let mut index = 0;
    while index + 1 < UNITS.len() && bytes >= STEP.pow(index as u32 + 1) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 2, "0 Bytes")]
    #[case(1, 2, "1 B")]
    #[case(500, 2, "500 B")]
    #[case(1023, 2, "1023 B")]
    #[case(1024, 2, "1 KB")]
    #[case(1234, 2, "1.21 KB")]
    #[case(1234, 3, "1.205 KB")]
    #[case(1234, 0, "1 KB")]
    #[case(1234, -4, "1 KB")]
    #[case(1536, 2, "1.5 KB")]
    #[case(1_048_576, 2, "1 MB")]
    #[case(1_073_741_824, 2, "1 GB")]
    #[case(u64::MAX, 2, "16 EB")]
    #[case(1152, 2, "1.13 KB")]
    #[case(2560, 0, "3 KB")]
    #[case(1280, 1, "1.3 KB")]
    #[case(1234, 100, "1.205078125 KB")]
    #[case(1234, i32::MAX, "1.205078125 KB")]
    #[case(1234, i32::MIN, "1 KB")]
    fn test_format_size_units(#[case] bytes: u64, #[case] decimals: i32, #[case] expected: &str) {
        assert_eq!(format_size_units(bytes, decimals), expected);
    }

    #[test]
    fn test_format_size_defaults_to_two_places() {
        assert_eq!(format_size(1234), "1.21 KB");
    }

    #[rstest]
    #[case(1.125, 2, 1.13)]
    #[case(2.5, 0, 3.0)]
    #[case(0.5, 0, 1.0)]
    #[case(1.0, 70_000, 1.0)]
    fn test_round_half_up(#[case] value: f64, #[case] decimals: i32, #[case] expected: f64) {
        assert_eq!(round_half_up(value, decimals), expected);
    }

    #[test]
    fn test_unit_index_boundaries() {
        assert_eq!(unit_index(1023), 0);
        assert_eq!(unit_index(1024), 1);
        assert_eq!(unit_index(1024 * 1024 - 1), 1);
        assert_eq!(unit_index(1024 * 1024), 2);
    }
}
