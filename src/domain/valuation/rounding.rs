//! Rounding helpers shared by the scoring and valuation stages.

/// Rounds to the nearest integer, with halves rounding toward positive infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. Unlike `f64::round`, negative halves do not
/// round away from zero.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_rounds_halves_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(92.5), 93.0);
    }

    #[test]
    fn round_half_up_rounds_negative_halves_toward_zero() {
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
    }

    #[test]
    fn round_half_up_leaves_integers_alone() {
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(2_275_000.0), 2_275_000.0);
        assert_eq!(round_half_up(-100.0), -100.0);
    }

    #[test]
    fn round_half_up_rounds_to_nearest() {
        assert_eq!(round_half_up(93.333), 93.0);
        assert_eq!(round_half_up(66.667), 67.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }
}
