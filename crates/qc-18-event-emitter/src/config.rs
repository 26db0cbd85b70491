//! Emitter configuration and its canonical factories

use crate::domain::{
    check_interval_ordering, check_limits, check_threshold_ordering, EmitIntervals, GasTier,
    DOUBLESIGN_MARGIN_FACTOR,
};
use crate::error::Result;
use crate::params::{self, Address, Frame, EVENT_GAS, TX_GAS, TX_TURN_NONCES};
use crate::ports::RandomSource;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Forced-emission ceiling on fake (test) networks
pub const FAKENET_MAX_EMIT_INTERVAL: Duration = Duration::from_secs(10);

/// Configuration of the events emitter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitterConfig {
    /// Version stamped into emitted events. Injected from build metadata,
    /// never read from or written to a configuration document.
    #[serde(skip)]
    pub version_to_publish: String,

    /// Validator on whose behalf events are emitted
    pub validator: Address,

    /// Event emission intervals
    pub emit_intervals: EmitIntervals,

    /// Bound on gas-rate estimate growth between events.
    /// Float is fine here: only a local heuristic depends on it.
    pub max_gas_rate_growth_factor: f64,

    /// Transactions from a single sender admitted into one event
    pub max_txs_from_sender: usize,

    /// Number of frames before an event is considered to belong to the epoch tail
    pub epoch_tail_length: Frame,

    /// Parent references per emitted event
    pub max_parents: usize,

    /// Gas-left threshold for full-rate emission
    pub smooth_tps_threshold: u64,

    /// Gas-left threshold below which events carry no transactions
    pub no_txs_threshold: u64,

    /// Gas-left reserve below which emission is throttled hard
    pub emergency_threshold: u64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        default_emitter_config()
    }
}

/// Default configuration for the events emitter
pub fn default_emitter_config() -> EmitterConfig {
    EmitterConfig {
        version_to_publish: params::version_with_meta(),

        validator: Address::zero(),

        // doublesign_protection should be at least 2x max
        emit_intervals: EmitIntervals::default(),

        max_gas_rate_growth_factor: 3.0,
        max_txs_from_sender: TX_TURN_NONCES,
        epoch_tail_length: 1,

        max_parents: 7,

        smooth_tps_threshold: (EVENT_GAS + TX_GAS) * 500,
        no_txs_threshold: EVENT_GAS * 30,
        emergency_threshold: EVENT_GAS * 5,
    }
}

/// Testing configuration for the events emitter.
///
/// Same as the default, but with a short forced-emission ceiling so fake
/// networks don't sit idle. The double-sign window follows at 1.5x `max`.
pub fn fake_emitter_config() -> EmitterConfig {
    let mut cfg = default_emitter_config();
    cfg.emit_intervals.max = FAKENET_MAX_EMIT_INTERVAL;
    cfg.emit_intervals.doublesign_protection = cfg.emit_intervals.max * 3 / 2;
    cfg
}

impl EmitterConfig {
    /// Validate configuration
    ///
    /// A double-sign window shorter than `DOUBLESIGN_MARGIN_FACTOR` times
    /// `max` is reported but not rejected.
    pub fn validate(&self) -> Result<()> {
        check_interval_ordering(&self.emit_intervals)?;

        check_threshold_ordering(
            self.smooth_tps_threshold,
            self.no_txs_threshold,
            self.emergency_threshold,
        )?;

        check_limits(
            self.max_parents,
            self.max_txs_from_sender,
            self.max_gas_rate_growth_factor,
        )?;

        if !self.emit_intervals.doublesign_margin_ok() {
            warn!(
                max = ?self.emit_intervals.max,
                doublesign_protection = ?self.emit_intervals.doublesign_protection,
                factor = DOUBLESIGN_MARGIN_FACTOR,
                "Double-sign protection window is shorter than recommended"
            );
        }

        Ok(())
    }

    /// Decode a configuration document, overlaying it on the defaults.
    ///
    /// Missing keys keep their default values; the result is validated.
    pub fn from_json(document: &str) -> Result<Self> {
        let config: EmitterConfig = serde_json::from_str(document)?;
        config.validate()?;

        debug!(
            validator = ?config.validator,
            max_parents = config.max_parents,
            "Loaded emitter configuration"
        );

        Ok(config)
    }

    /// Encode the persisted surface (everything except `version_to_publish`)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy of this configuration emitting on behalf of `validator`
    pub fn with_validator(&self, validator: Address) -> Self {
        Self {
            validator,
            ..self.clone()
        }
    }

    /// Copy of this configuration with jittered emit intervals
    pub fn with_randomized_intervals<R>(&self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        Self {
            emit_intervals: self.emit_intervals.randomize_emit_time(rng),
            ..self.clone()
        }
    }

    /// Classify the remaining gas budget
    pub fn gas_tier(&self, gas_left: u64) -> GasTier {
        GasTier::classify(
            gas_left,
            self.smooth_tps_threshold,
            self.no_txs_threshold,
            self.emergency_threshold,
        )
    }
}
