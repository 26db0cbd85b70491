//! Emit interval policy and per-instance jitter
//!
//! The jitter is intentionally asymmetric:
//! - `max` (a liveness bound) may only shrink, into `[0.9 * max, max)`
//! - `doublesign_protection` (a safety bound) may only grow, into
//!   `[dsp, 1.1 * dsp)`
//!
//! Spreading `max` downward keeps independently started nodes from firing
//! their forced-emission timers in lockstep. Growing the double-sign window
//! can only widen the safety margin.

use crate::ports::RandomSource;
use crate::utils::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Intervals at or below this value are treated as disabled and never jittered
pub const JITTER_FLOOR: Duration = Duration::from_nanos(10);

/// Largest interval (in nanoseconds) that is jittered; larger values pass through
const MAX_JITTER_NANOS: u64 = i64::MAX as u64;

/// Documented lower bound of `doublesign_protection / max`
pub const DOUBLESIGN_MARGIN_FACTOR: u32 = 2;

/// Timing policy for event emission
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitIntervals {
    /// Minimum spacing between consecutive emitted events
    #[serde(with = "duration_serde")]
    pub min: Duration,

    /// Maximum spacing before an event is forced, even with nothing to include
    #[serde(with = "duration_serde")]
    pub max: Duration,

    /// Spacing used when there are no txs to originate but at least one to confirm
    #[serde(with = "duration_serde")]
    pub confirming: Duration,

    /// Quiet period required before emitting, to detect another instance
    /// running under the same validator identity
    #[serde(with = "duration_serde")]
    pub parallel_instance_protection: Duration,

    /// Minimum time since the last self-authored event before emitting again.
    /// Should be at least `DOUBLESIGN_MARGIN_FACTOR` times `max`.
    #[serde(with = "duration_serde")]
    pub doublesign_protection: Duration,
}

impl Default for EmitIntervals {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(200),
            max: Duration::from_secs(12 * 60),
            confirming: Duration::from_millis(200),
            parallel_instance_protection: Duration::from_secs(60),
            doublesign_protection: Duration::from_secs(30 * 60),
        }
    }
}

impl EmitIntervals {
    /// Derive a jittered copy of this policy.
    ///
    /// `self` is left untouched, so one policy can be shared by any number
    /// of derivations. Draw order is `max` first, then
    /// `doublesign_protection`; a seeded source therefore reproduces the
    /// same result.
    pub fn randomize_emit_time<R>(&self, rng: &mut R) -> EmitIntervals
    where
        R: RandomSource + ?Sized,
    {
        let mut intervals = *self;

        // max = max - max/10 + rand[0, max/10)
        if let Some(nanos) = jitter_nanos(self.max, "max") {
            let tenth = nanos / 10;
            intervals.max = Duration::from_nanos(nanos - tenth + rng.below(tenth));
        }

        // dsp = dsp + rand[0, dsp/10)
        if let Some(nanos) = jitter_nanos(self.doublesign_protection, "doublesign_protection") {
            let tenth = nanos / 10;
            intervals.doublesign_protection = Duration::from_nanos(nanos + rng.below(tenth));
        }

        debug!(
            max = ?self.max,
            jittered_max = ?intervals.max,
            doublesign_protection = ?self.doublesign_protection,
            jittered_doublesign_protection = ?intervals.doublesign_protection,
            "Randomized emit intervals"
        );

        intervals
    }

    /// Whether `doublesign_protection` covers at least twice `max`.
    ///
    /// Not enforced by the factories: the fake network runs at 1.5x.
    pub fn doublesign_margin_ok(&self) -> bool {
        self.max
            .checked_mul(DOUBLESIGN_MARGIN_FACTOR)
            .is_some_and(|bound| self.doublesign_protection >= bound)
    }
}

/// Nanosecond value of an interval eligible for jitter.
///
/// Returns `None` at or below `JITTER_FLOOR` (so `value / 10` is never zero)
/// and above `MAX_JITTER_NANOS` (so `value + value / 10` cannot overflow).
fn jitter_nanos(value: Duration, field: &'static str) -> Option<u64> {
    if value <= JITTER_FLOOR {
        return None;
    }
    match u64::try_from(value.as_nanos()) {
        Ok(nanos) if nanos <= MAX_JITTER_NANOS => Some(nanos),
        _ => {
            warn!(field, value = ?value, "Emit interval too large to jitter, keeping as is");
            None
        }
    }
}
