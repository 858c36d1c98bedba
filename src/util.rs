/// Round to `places` decimal places, half away from zero
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Share of `part` in `whole` as a percentage rounded to two decimals
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    match whole {
        positive if positive > 0 => Some(round_to(part as f64 / whole as f64 * 100.0, 2)),
        _ => None,
    }
}

/// Largest integer whose square does not exceed `n`
pub fn isqrt(n: u32) -> u32 {
    let mut root = (n as f64).sqrt() as u32;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(66.666_666, 2), 66.67);
        assert_eq!(round_to(33.333_333, 2), 33.33);
        assert_eq!(round_to(50.0, 2), 50.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 3), Some(66.67));
        assert_eq!(percentage(1, 3), Some(33.33));
        assert_eq!(percentage(3, 3), Some(100.0));
        assert_eq!(percentage(0, 7), Some(0.0));
    }

    #[test]
    fn test_percentage_empty_whole() {
        assert_eq!(percentage(0, 0), None);
    }

    #[test]
    fn test_isqrt_difficulty_caps() {
        assert_eq!(isqrt(20), 4);
        assert_eq!(isqrt(100), 10);
        assert_eq!(isqrt(1000), 31);
    }

    #[test]
    fn test_isqrt_small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
    }
}
