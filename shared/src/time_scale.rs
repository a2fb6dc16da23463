//! Simulation rate overrides.
//!
//! The enter-vehicle sequence slows the whole simulation. Each slowdown is a [`RateOverride`]
//! guard: the simulation runs at the override scale while at least one guard is alive and
//! returns to the base scale when the last guard drops. Dropping the guard is the only way
//! to end an override.
//!
//! Engine adapters read [`SimulationRate::scale`] once per frame and apply it to their clock
//! (the Bevy client maps it onto `Time<Virtual>`). Simulated durations are unaffected: a tick
//! still advances by the fixed step, ticks just arrive less often in real time.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::constants::ENTER_TIME_SCALE;

/// Shared handle to the simulation rate. Clones observe the same overrides.
#[derive(Clone, Debug)]
pub struct SimulationRate {
    active: Arc<AtomicUsize>,
    base_scale: f32,
    override_scale: f32,
}

impl Default for SimulationRate {
    fn default() -> Self {
        Self::new(1.0, ENTER_TIME_SCALE)
    }
}

impl SimulationRate {
    pub fn new(base_scale: f32, override_scale: f32) -> Self {
        Self {
            active: Arc::new(AtomicUsize::new(0)),
            base_scale: base_scale.max(0.0),
            override_scale: override_scale.max(0.0),
        }
    }

    /// Current time scale to apply to the simulation clock.
    pub fn scale(&self) -> f32 {
        if self.is_overridden() {
            self.override_scale
        } else {
            self.base_scale
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.active.load(Ordering::Acquire) > 0
    }

    /// Slow the simulation until the returned guard is dropped.
    #[must_use = "the override ends as soon as the guard is dropped"]
    pub fn acquire(&self) -> RateOverride {
        self.active.fetch_add(1, Ordering::AcqRel);
        log::debug!("simulation rate override acquired (scale {})", self.override_scale);
        RateOverride {
            active: Arc::clone(&self.active),
        }
    }
}

/// Scoped slowdown. Restores the base rate on drop once no other override is alive.
#[derive(Debug)]
pub struct RateOverride {
    active: Arc<AtomicUsize>,
}

impl Drop for RateOverride {
    fn drop(&mut self) {
        let before = self.active.fetch_sub(1, Ordering::AcqRel);
        if before == 1 {
            log::debug!("simulation rate restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_slows_and_restores() {
        let rate = SimulationRate::default();
        assert_eq!(rate.scale(), 1.0);

        let guard = rate.acquire();
        assert_eq!(rate.scale(), ENTER_TIME_SCALE);

        drop(guard);
        assert_eq!(rate.scale(), 1.0);
    }

    #[test]
    fn overlapping_guards_restore_after_the_last_one() {
        let rate = SimulationRate::default();
        let first = rate.acquire();
        let second = rate.clone().acquire();

        drop(first);
        assert!(rate.is_overridden());

        drop(second);
        assert!(!rate.is_overridden());
        assert_eq!(rate.scale(), 1.0);
    }

    #[test]
    fn guard_restores_when_its_owner_unwinds() {
        let rate = SimulationRate::default();
        let result = std::panic::catch_unwind({
            let rate = rate.clone();
            move || {
                let _slow = rate.acquire();
                panic!("sequence aborted");
            }
        });
        assert!(result.is_err());
        assert_eq!(rate.scale(), 1.0);
    }
}
