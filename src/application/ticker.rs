use std::time::Duration;

/// Period between generation advances while running
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Fixed-cadence timer fed with frame deltas.
/// Reports at most one due tick per call and carries the remainder so
/// uneven frame times do not drift the cadence.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    elapsed: f32,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Accumulate `delta_time` seconds; true when an advance is due
    pub fn tick(&mut self, delta_time: f32) -> bool {
        let period = self.period.as_secs_f32();
        self.elapsed += delta_time.max(0.0);
        if self.elapsed < period {
            return false;
        }
        // A long stall fires once instead of replaying every missed tick
        self.elapsed = (self.elapsed - period).min(period);
        true
    }

    /// Drop any accumulated time
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
