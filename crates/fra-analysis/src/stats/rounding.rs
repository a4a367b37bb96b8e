//! Integer percentages and rounding that matches the dashboard's display.

/// `round(part / whole * 100)` with halves rounded up, computed in integers.
/// Returns 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part as u128;
    let whole = whole as u128;
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Rounds to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Arithmetic mean; 0.0 for empty input.
pub fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(0, 7), 0);
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(10.0, 0), 0.0);
        assert_eq!(mean(10.0, 4), 2.5);
    }
}
