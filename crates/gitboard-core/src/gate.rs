//! Single-flight, time-windowed admission for refresh cycles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

/// How often data collection may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Collect once, render once, exit.
    OneShot,
    /// Collect at most once per `interval`, keep rendering until shut down.
    Watch { interval: Duration },
}

impl RefreshMode {
    pub fn is_watch(&self) -> bool {
        matches!(self, RefreshMode::Watch { .. })
    }
}

#[derive(Debug, Default)]
struct GateState {
    /// The window stays closed up to and including this instant.
    reopen_at: Option<Instant>,
    in_flight: bool,
}

/// Decides whether a new refresh cycle may start.
///
/// In watch mode a successful acquisition closes the window for one
/// interval measured from the acquisition instant, regardless of how long
/// the cycle takes. A cycle that is still running also keeps the gate
/// closed; its [`RefreshPermit`] reopens that half when dropped.
///
/// The window is still closed at exactly `acquired_at + interval`. A render
/// tick that lands on that instant is refused, so with a tick period `T`
/// that divides the interval `W` cycles start every `W + T`, not every `W`.
#[derive(Debug)]
pub struct RefreshGate {
    mode: RefreshMode,
    state: Mutex<GateState>,
}

impl RefreshGate {
    pub fn new(mode: RefreshMode) -> Arc<Self> {
        Arc::new(Self {
            mode,
            state: Mutex::new(GateState::default()),
        })
    }

    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    pub fn try_acquire(self: &Arc<Self>) -> Option<RefreshPermit> {
        self.try_acquire_at(Instant::now())
    }

    /// Attempt to start a cycle at `now`. Refusal has no side effects.
    pub fn try_acquire_at(self: &Arc<Self>, now: Instant) -> Option<RefreshPermit> {
        let interval = match self.mode {
            RefreshMode::OneShot => return Some(RefreshPermit { gate: None }),
            RefreshMode::Watch { interval } => interval,
        };

        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if state.in_flight {
            trace!(event = "core.gate.refused_in_flight");
            return None;
        }
        if let Some(reopen_at) = state.reopen_at
            && now <= reopen_at
        {
            trace!(event = "core.gate.refused_window");
            return None;
        }

        state.reopen_at = Some(now + interval);
        state.in_flight = true;

        Some(RefreshPermit {
            gate: Some(Arc::clone(self)),
        })
    }

    /// Whether a cycle is currently outstanding.
    pub fn in_flight(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .in_flight
    }

    fn release(&self) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.in_flight = false;
    }
}

/// Held for the lifetime of one refresh cycle.
#[derive(Debug)]
pub struct RefreshPermit {
    gate: Option<Arc<RefreshGate>>,
}

impl Drop for RefreshPermit {
    fn drop(&mut self) {
        if let Some(gate) = self.gate.take() {
            gate.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watch(secs: u64) -> Arc<RefreshGate> {
        RefreshGate::new(RefreshMode::Watch {
            interval: Duration::from_secs(secs),
        })
    }

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_one_shot_always_acquires() {
        let gate = RefreshGate::new(RefreshMode::OneShot);
        let start = Instant::now();

        let first = gate.try_acquire_at(start);
        let second = gate.try_acquire_at(start);
        assert!(first.is_some());
        assert!(second.is_some());
        assert!(!gate.in_flight());
    }

    #[test]
    fn test_watch_acquires_once_per_window() {
        let gate = watch(5);
        let start = Instant::now();

        // Render ticks every 250ms across a 5.2s window.
        let acquired = (0..=20)
            .map(|tick| gate.try_acquire_at(at(start, tick * 250)))
            .filter(|permit| permit.is_some())
            .count();
        assert_eq!(acquired, 1);

        assert!(gate.try_acquire_at(at(start, 5_250)).is_some());
    }

    #[test]
    fn test_boundary_tick_delays_next_cycle_by_one_tick() {
        let gate = watch(1);
        let start = Instant::now();

        let acquired: Vec<u64> = (0..=12)
            .map(|tick| tick * 250)
            .filter(|&millis| gate.try_acquire_at(at(start, millis)).is_some())
            .collect();
        assert_eq!(acquired, vec![0, 1_250, 2_500]);
    }

    #[test]
    fn test_refusal_does_not_extend_window() {
        let gate = watch(1);
        let start = Instant::now();

        drop(gate.try_acquire_at(start));
        assert!(gate.try_acquire_at(at(start, 900)).is_none());
        assert!(gate.try_acquire_at(at(start, 1_000)).is_none());
        assert!(gate.try_acquire_at(at(start, 1_001)).is_some());
    }

    #[test]
    fn test_in_flight_cycle_blocks_until_permit_dropped() {
        let gate = watch(1);
        let start = Instant::now();

        let slow_cycle = gate.try_acquire_at(start).unwrap();
        assert!(gate.in_flight());

        // Window elapsed but the first cycle is still running.
        assert!(gate.try_acquire_at(at(start, 2_500)).is_none());

        drop(slow_cycle);
        assert!(!gate.in_flight());

        // The window was timed from acquisition, so no extra wait is added.
        assert!(gate.try_acquire_at(at(start, 2_750)).is_some());
    }

    #[test]
    fn test_fast_cycle_does_not_reopen_window_early() {
        let gate = watch(5);
        let start = Instant::now();

        drop(gate.try_acquire_at(start).unwrap());
        assert!(!gate.in_flight());
        assert!(gate.try_acquire_at(at(start, 250)).is_none());
    }

    #[test]
    fn test_mode_reports_watch() {
        assert!(watch(5).mode().is_watch());
        assert!(!RefreshMode::OneShot.is_watch());
    }
}
