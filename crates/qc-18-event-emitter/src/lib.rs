//! # Quantum Chain - Event Emitter Configuration (Subsystem 18)
//!
//! **Bounded Context:** Event Emission Policy
//! **Architecture Compliance:** DDD + Hexagonal
//!
//! ## Purpose
//!
//! Decides *when* a validator is allowed to emit a new event into the gossip
//! DAG. What goes into the event (transaction and parent selection, signing,
//! broadcast) belongs to the emitter itself; this crate only provides the
//! configuration it consumes:
//!
//! - Emit intervals (`min`, `max`, `confirming`, parallel-instance and
//!   double-sign protection windows)
//! - Gas-budget thresholds that select the emission tier
//! - Per-instance jitter so independently started nodes don't emit in lockstep
//!
//! ## Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Config (Outer)                                     │
//! │  - default / fake factories                         │
//! │  - JSON surface, validation                         │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ports (Middle)                                     │
//! │  - Outbound: RandomSource                           │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (Inner - Pure Logic)                        │
//! │  - EmitIntervals + randomize_emit_time              │
//! │  - GasTier                                          │
//! │  - Invariant checkers                               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical Invariants
//!
//! 1. **Jitter Direction**: `max` only shrinks (into `[0.9x, 1.0x)`),
//!    `doublesign_protection` only grows (into `[1.0x, 1.1x)`)
//! 2. **Pass-through**: `min`, `confirming`, `parallel_instance_protection`
//!    are never jittered
//! 3. **Copy Semantics**: jitter never mutates its input
//! 4. **Threshold Ordering**: smooth TPS > no txs > emergency
//!
//! ## Usage Example
//!
//! ```rust
//! use qc_18_event_emitter::{default_emitter_config, GasTier};
//! use rand::SeedableRng;
//!
//! let config = default_emitter_config();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let intervals = config.emit_intervals.randomize_emit_time(&mut rng);
//!
//! assert!(intervals.max < config.emit_intervals.max);
//! assert_eq!(config.gas_tier(0), GasTier::Emergency);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Domain models and business logic
pub mod domain;
/// Network parameters (gas costs, version metadata)
pub mod params;
pub mod ports;
pub mod utils;

mod config;
mod error;

pub use config::{
    default_emitter_config, fake_emitter_config, EmitterConfig, FAKENET_MAX_EMIT_INTERVAL,
};
pub use error::{EmitterConfigError, Result};

pub use domain::{EmitIntervals, GasTier, DOUBLESIGN_MARGIN_FACTOR, JITTER_FLOOR};
pub use params::{Address, Frame};
pub use ports::RandomSource;

/// Subsystem identifier for IPC communication
pub const SUBSYSTEM_ID: u8 = 18;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystem_id() {
        assert_eq!(SUBSYSTEM_ID, 18);
    }
}
