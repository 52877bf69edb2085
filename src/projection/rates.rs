//! Rate conversions shared by every projector

/// Convert a yearly fractional rate to the equivalent compounded monthly rate
///
/// Twelve months at the returned rate reproduce `1 + yearly` exactly (up to
/// floating point).
pub fn monthly_rate(yearly: f64) -> f64 {
    (1.0 + yearly).powf(1.0 / 12.0) - 1.0
}

/// Apply a discrete yearly step-up to an amount that otherwise carries over
///
/// The step happens on every 12-month boundary (months 12, 24, ...) and is
/// applied to the current value, so increases compound year on year.
pub fn escalate_yearly(month: usize, current: f64, yearly_increase: f64) -> f64 {
    if month > 0 && month % 12 == 0 {
        current + current * yearly_increase
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate_compounds_to_yearly() {
        for yearly in [0.035, 0.06, 0.09, -0.015] {
            let monthly = monthly_rate(yearly);
            assert_relative_eq!((1.0 + monthly).powi(12), 1.0 + yearly, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_escalation_only_on_year_boundary() {
        assert_eq!(escalate_yearly(0, 100.0, 0.1), 100.0);
        assert_eq!(escalate_yearly(11, 100.0, 0.1), 100.0);
        assert_relative_eq!(escalate_yearly(12, 100.0, 0.1), 110.0, max_relative = 1e-12);
        assert_eq!(escalate_yearly(13, 100.0, 0.1), 100.0);
        assert_relative_eq!(escalate_yearly(24, 110.0, 0.1), 121.0, max_relative = 1e-12);
    }
}
