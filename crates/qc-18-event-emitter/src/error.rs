//! Error types for the event emitter configuration

use thiserror::Error;

/// Result type alias for emitter configuration operations
pub type Result<T> = std::result::Result<T, EmitterConfigError>;

/// Errors raised while loading or validating an emitter configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmitterConfigError {
    /// Emit interval is zero or out of order
    #[error("invalid emit interval: {0}")]
    InvalidInterval(String),

    /// Gas-budget thresholds are not strictly decreasing
    #[error(
        "invalid gas thresholds: smoothTps {smooth_tps} > noTxs {no_txs} > emergency {emergency} does not hold"
    )]
    InvalidThresholds {
        /// Smooth TPS threshold
        smooth_tps: u64,
        /// No-transactions threshold
        no_txs: u64,
        /// Emergency threshold
        emergency: u64,
    },

    /// Count or factor limit out of range
    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    /// Configuration document could not be decoded or encoded
    #[error("configuration parse error: {0}")]
    Parse(String),
}

impl EmitterConfigError {
    /// Check if error is recoverable (fixing the document and reloading helps)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<serde_json::Error> for EmitterConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_recoverability() {
        assert!(EmitterConfigError::Parse("eof".into()).is_recoverable());
        assert!(!EmitterConfigError::InvalidInterval("min".into()).is_recoverable());
        assert!(!EmitterConfigError::InvalidThresholds {
            smooth_tps: 1,
            no_txs: 2,
            emergency: 3,
        }
        .is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = EmitterConfigError::InvalidThresholds {
            smooth_tps: 10,
            no_txs: 20,
            emergency: 5,
        };
        assert!(err.to_string().contains("smoothTps 10"));
    }
}
