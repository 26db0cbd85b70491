//! Domain layer - Pure emission policy logic
//!
//! Everything here is pure (no I/O, no async). Randomness comes in through
//! the [`RandomSource`](crate::ports::RandomSource) port.
//!
//! - [`EmitIntervals`]: timing policy plus per-instance jitter
//! - [`GasTier`]: gas-budget classification
//! - [`invariants`]: operator-side configuration checks

pub mod gas_tier;
pub mod intervals;
pub mod invariants;

pub use gas_tier::GasTier;
pub use intervals::{EmitIntervals, DOUBLESIGN_MARGIN_FACTOR, JITTER_FLOOR};
pub use invariants::*;
