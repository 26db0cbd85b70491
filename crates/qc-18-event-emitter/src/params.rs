//! Network parameters consumed by the emitter configuration
//!
//! Gas costs are charged against a validator's gas budget for every emitted
//! event and every included transaction. They are only used here to derive
//! the default gas-budget thresholds.

use primitive_types::H160;

/// Validator identity (20-byte address)
pub type Address = H160;

/// Frame index inside an epoch
pub type Frame = u32;

/// Base gas cost of emitting one event
pub const EVENT_GAS: u64 = 28_000;

/// Base gas cost of one transaction
pub const TX_GAS: u64 = 21_000;

/// Number of sequential nonces a sender may occupy within one turn
pub const TX_TURN_NONCES: usize = 32;

/// Release metadata appended to the published version
pub const VERSION_META: &str = "stable";

/// Version string stamped into emitted events, e.g. `0.1.0-stable`.
pub fn version_with_meta() -> String {
    let version = env!("CARGO_PKG_VERSION");
    if VERSION_META.is_empty() {
        version.to_string()
    } else {
        format!("{}-{}", version, VERSION_META)
    }
}
