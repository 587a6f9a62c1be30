//! Currency rounding
//!
//! Every public boundary that returns a currency amount rounds through
//! `round_cents` so the predictor and all rule engines agree on precision.

/// Round a currency amount to 2 decimal places (half away from zero)
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1234.5678), 1234.57);
        assert_eq!(round_cents(1234.5), 1234.5);
        assert_eq!(round_cents(0.005), 0.01);
        assert_eq!(round_cents(-0.005), -0.01);
        assert_eq!(round_cents(0.0), 0.0);
    }
}
