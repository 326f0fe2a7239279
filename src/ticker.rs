/// Fixed-interval trigger for the logic tick.
///
/// Owned by the main loop; the caller supplies the current monotonic
/// time each frame. Fires when a full interval has elapsed since the
/// last fire (threshold compare, no catch-up bursts after a slow frame).
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f64,
    last_fire: f64,
}

impl Ticker {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_fire: 0.0,
        }
    }

    /// True when the interval has elapsed; records `now` as the fire time
    pub fn should_tick(&mut self, now: f64) -> bool {
        if now - self.last_fire >= self.interval {
            self.last_fire = now;
            return true;
        }
        false
    }
}
