//! Score arithmetic shared by the quiz apps

/// Percentage of correct answers, clamped to `[0, 100]`.
/// An empty quiz scores zero.
pub fn percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let correct = correct.min(total);
    f64::from(correct) / f64::from(total) * 100.0
}

/// Round to two decimal places for display and CSV output
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 4), 0.0);
        assert_eq!(percentage(3, 4), 75.0);
        assert_eq!(percentage(4, 4), 100.0);
    }

    #[test]
    fn test_percentage_edge_cases() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 4), 100.0);
        assert!((percentage(1, 3) - 33.333).abs() < 0.001);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.33333), 33.33);
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(12.0), 12.0);
    }
}
