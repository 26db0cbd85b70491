//! Gas-budget tiers
//!
//! A validator's remaining gas budget selects how aggressively it emits:
//!
//! ```text
//!   gas_left ≥ smooth_tps_threshold  → Smooth     (full cadence, txs allowed)
//!   gas_left ≥ no_txs_threshold      → Throttled  (stretched cadence, txs allowed)
//!   gas_left ≥ emergency_threshold   → NoTxs      (empty events only)
//!   otherwise                        → Emergency  (emit only to stay alive)
//! ```

use serde::{Deserialize, Serialize};

/// Emission behaviour tier derived from the remaining gas budget
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GasTier {
    /// Below the emergency reserve
    Emergency,
    /// Enough for empty events, not for transactions
    NoTxs,
    /// Transactions allowed at a reduced rate
    Throttled,
    /// Comfortably above typical usage
    Smooth,
}

impl GasTier {
    /// Classify `gas_left` against the three thresholds.
    ///
    /// Thresholds are expected to be strictly decreasing; with misordered
    /// thresholds the first matching tier from the top wins.
    pub fn classify(gas_left: u64, smooth_tps: u64, no_txs: u64, emergency: u64) -> Self {
        if gas_left >= smooth_tps {
            GasTier::Smooth
        } else if gas_left >= no_txs {
            GasTier::Throttled
        } else if gas_left >= emergency {
            GasTier::NoTxs
        } else {
            GasTier::Emergency
        }
    }

    /// Whether events emitted in this tier may carry transactions
    pub fn allows_transactions(&self) -> bool {
        matches!(self, GasTier::Smooth | GasTier::Throttled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let (s, n, e) = (1_000, 100, 10);
        assert_eq!(GasTier::classify(u64::MAX, s, n, e), GasTier::Smooth);
        assert_eq!(GasTier::classify(1_000, s, n, e), GasTier::Smooth);
        assert_eq!(GasTier::classify(999, s, n, e), GasTier::Throttled);
        assert_eq!(GasTier::classify(100, s, n, e), GasTier::Throttled);
        assert_eq!(GasTier::classify(99, s, n, e), GasTier::NoTxs);
        assert_eq!(GasTier::classify(10, s, n, e), GasTier::NoTxs);
        assert_eq!(GasTier::classify(9, s, n, e), GasTier::Emergency);
        assert_eq!(GasTier::classify(0, s, n, e), GasTier::Emergency);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(GasTier::Emergency < GasTier::NoTxs);
        assert!(GasTier::NoTxs < GasTier::Throttled);
        assert!(GasTier::Throttled < GasTier::Smooth);
    }

    #[test]
    fn test_allows_transactions() {
        assert!(GasTier::Smooth.allows_transactions());
        assert!(GasTier::Throttled.allows_transactions());
        assert!(!GasTier::NoTxs.allows_transactions());
        assert!(!GasTier::Emergency.allows_transactions());
    }
}
