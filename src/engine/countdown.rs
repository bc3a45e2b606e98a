/// Pre-shuffle countdown gate.
///
/// Shows the configured start value immediately, decrements once per
/// interval against the caller's millisecond clock, and fires exactly
/// once on reaching zero. If the caller ticks late, missed intervals
/// are caught up in a single call.
#[derive(Debug)]
pub struct Countdown {
    remaining: u32,
    next_tick_at: u64,
    interval_ms: u64,
    fired: bool,
}

impl Countdown {
    pub fn new(from: u32, started_at: u64, interval_ms: u64) -> Self {
        Self {
            remaining: from,
            next_tick_at: started_at + interval_ms,
            interval_ms,
            // A countdown from zero fires on the first tick.
            fired: false,
        }
    }

    /// Current display value.
    pub fn value(&self) -> u32 {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.fired
    }

    /// Advance the countdown. Returns true on the tick where it reaches
    /// zero; every later call returns false.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.fired {
            return false;
        }
        if self.remaining == 0 {
            self.fired = true;
            return true;
        }
        while self.remaining > 0 && now_ms >= self.next_tick_at {
            self.remaining -= 1;
            self.next_tick_at += self.interval_ms;
        }
        if self.remaining == 0 {
            self.fired = true;
            return true;
        }
        false
    }
}
