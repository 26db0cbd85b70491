//! Invariant checkers for emitter configurations
//!
//! These are operator-side checks. The factories and the jitter transform
//! never call them; the host decides when a configuration must be rejected.

use super::intervals::EmitIntervals;
use crate::error::{EmitterConfigError, Result};

/// Emit intervals must be positive and ordered: `0 < min <= max`,
/// `confirming > 0`.
pub fn check_interval_ordering(intervals: &EmitIntervals) -> Result<()> {
    if intervals.min.is_zero() {
        return Err(EmitterConfigError::InvalidInterval(
            "min cannot be 0".into(),
        ));
    }

    if intervals.min > intervals.max {
        return Err(EmitterConfigError::InvalidInterval(format!(
            "min {:?} exceeds max {:?}",
            intervals.min, intervals.max
        )));
    }

    if intervals.confirming.is_zero() {
        return Err(EmitterConfigError::InvalidInterval(
            "confirming cannot be 0".into(),
        ));
    }

    Ok(())
}

/// Gas thresholds must be strictly decreasing:
/// `smooth_tps > no_txs > emergency`.
pub fn check_threshold_ordering(smooth_tps: u64, no_txs: u64, emergency: u64) -> Result<()> {
    if smooth_tps > no_txs && no_txs > emergency {
        return Ok(());
    }
    Err(EmitterConfigError::InvalidThresholds {
        smooth_tps,
        no_txs,
        emergency,
    })
}

/// Count limits must be non-zero and the growth factor a finite value `>= 1.0`.
pub fn check_limits(max_parents: usize, max_txs_from_sender: usize, growth_factor: f64) -> Result<()> {
    if max_parents == 0 {
        return Err(EmitterConfigError::InvalidLimit(
            "maxParents cannot be 0".into(),
        ));
    }

    if max_txs_from_sender == 0 {
        return Err(EmitterConfigError::InvalidLimit(
            "maxTxsFromSender cannot be 0".into(),
        ));
    }

    if !growth_factor.is_finite() || growth_factor < 1.0 {
        return Err(EmitterConfigError::InvalidLimit(format!(
            "maxGasRateGrowthFactor must be a finite value >= 1.0, got {}",
            growth_factor
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_intervals_pass() {
        assert!(check_interval_ordering(&EmitIntervals::default()).is_ok());
    }

    #[test]
    fn test_zero_min_rejected() {
        let intervals = EmitIntervals {
            min: Duration::ZERO,
            ..EmitIntervals::default()
        };
        assert!(matches!(
            check_interval_ordering(&intervals),
            Err(EmitterConfigError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let intervals = EmitIntervals {
            min: Duration::from_secs(20),
            max: Duration::from_secs(10),
            ..EmitIntervals::default()
        };
        let err = check_interval_ordering(&intervals).unwrap_err();
        assert!(err.to_string().contains("exceeds max"));
    }

    #[test]
    fn test_min_equal_max_allowed() {
        let intervals = EmitIntervals {
            min: Duration::from_secs(10),
            max: Duration::from_secs(10),
            ..EmitIntervals::default()
        };
        assert!(check_interval_ordering(&intervals).is_ok());
    }

    #[test]
    fn test_zero_confirming_rejected() {
        let intervals = EmitIntervals {
            confirming: Duration::ZERO,
            ..EmitIntervals::default()
        };
        assert!(check_interval_ordering(&intervals).is_err());
    }

    #[test]
    fn test_threshold_ordering() {
        assert!(check_threshold_ordering(3, 2, 1).is_ok());
        assert!(check_threshold_ordering(3, 3, 1).is_err());
        assert!(check_threshold_ordering(3, 1, 1).is_err());
        assert_eq!(
            check_threshold_ordering(1, 2, 3),
            Err(EmitterConfigError::InvalidThresholds {
                smooth_tps: 1,
                no_txs: 2,
                emergency: 3,
            })
        );
    }

    #[test]
    fn test_limits() {
        assert!(check_limits(7, 32, 3.0).is_ok());
        assert!(check_limits(0, 32, 3.0).is_err());
        assert!(check_limits(7, 0, 3.0).is_err());
        assert!(check_limits(7, 32, 0.5).is_err());
        assert!(check_limits(7, 32, f64::NAN).is_err());
        assert!(check_limits(7, 32, f64::INFINITY).is_err());
    }
}
