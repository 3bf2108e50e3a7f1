//! # Dwell Detector
//!
//! Per-card hover timer feeding the Snack Hunt. Holding pointer focus on
//! today's hidden snack accumulates dwell time in fixed ticks; crossing the
//! threshold fires discovery exactly once. Leaving early resets the
//! accumulator to zero, so a later re-focus starts over.

/// Continuous focus required to discover, in milliseconds.
pub const DWELL_THRESHOLD_MS: u64 = 1500;

/// Accumulator granularity per tick, in milliseconds.
pub const DWELL_TICK_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DwellPhase {
    Idle,
    Dwelling,
    /// Terminal for the day. No further ticks or transitions.
    Discovered,
}

pub struct DwellDetector {
    phase: DwellPhase,
    accumulated_ms: u64,
}

impl Default for DwellDetector {
    fn default() -> Self {
        Self {
            phase: DwellPhase::Idle,
            accumulated_ms: 0,
        }
    }
}

impl DwellDetector {
    pub fn phase(&self) -> DwellPhase {
        self.phase
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    /// Pointer focus begins. Only starts dwelling on today's hidden snack
    /// when it has not been discovered yet.
    pub fn pointer_enter(&mut self, is_hidden: bool, discovered_today: bool) {
        if self.phase != DwellPhase::Idle || !is_hidden || discovered_today {
            return;
        }

        self.phase = DwellPhase::Dwelling;
    }

    /// Pointer focus ends before the threshold; accumulation restarts from
    /// zero on the next entry.
    pub fn pointer_leave(&mut self) {
        if self.phase == DwellPhase::Dwelling {
            self.phase = DwellPhase::Idle;
            self.accumulated_ms = 0;
        }
    }

    /// Advances the accumulator by one tick while focus is held. Returns
    /// true exactly once, on the tick that crosses the threshold; the
    /// caller defers the actual discovery to the session queue.
    pub fn tick(&mut self) -> bool {
        if self.phase != DwellPhase::Dwelling {
            return false;
        }

        self.accumulated_ms += DWELL_TICK_MS;

        if self.accumulated_ms >= DWELL_THRESHOLD_MS {
            self.phase = DwellPhase::Discovered;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_never_fires() {
        let mut dwell = DwellDetector::default();
        dwell.pointer_enter(true, false);

        for _ in 0..14 {
            assert!(!dwell.tick());
        }
        assert_eq!(dwell.accumulated_ms(), 1400);
        assert_eq!(dwell.phase(), DwellPhase::Dwelling);
    }

    #[test]
    fn threshold_crossing_fires_exactly_once() {
        let mut dwell = DwellDetector::default();
        dwell.pointer_enter(true, false);

        let mut fired = 0;
        for _ in 0..20 {
            if dwell.tick() {
                fired += 1;
            }
        }

        assert_eq!(fired, 1);
        assert_eq!(dwell.phase(), DwellPhase::Discovered);
    }

    #[test]
    fn early_exit_resets_accumulation() {
        let mut dwell = DwellDetector::default();
        dwell.pointer_enter(true, false);

        for _ in 0..14 {
            dwell.tick();
        }
        dwell.pointer_leave();
        assert_eq!(dwell.accumulated_ms(), 0);

        // re-focus accumulates from zero, not from 1400
        dwell.pointer_enter(true, false);
        assert!(!dwell.tick());
        assert_eq!(dwell.accumulated_ms(), 100);
    }

    #[test]
    fn non_hidden_or_claimed_cards_never_dwell() {
        let mut dwell = DwellDetector::default();

        dwell.pointer_enter(false, false);
        assert_eq!(dwell.phase(), DwellPhase::Idle);

        dwell.pointer_enter(true, true);
        assert_eq!(dwell.phase(), DwellPhase::Idle);

        assert!(!dwell.tick());
        assert_eq!(dwell.accumulated_ms(), 0);
    }

    #[test]
    fn discovered_is_terminal() {
        let mut dwell = DwellDetector::default();
        dwell.pointer_enter(true, false);

        while !dwell.tick() {}

        dwell.pointer_leave();
        assert_eq!(dwell.phase(), DwellPhase::Discovered);

        dwell.pointer_enter(true, false);
        assert!(!dwell.tick());
    }
}
