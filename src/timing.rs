/// Lets a game tick through at most once per interval, measured against the
/// frame clock in seconds.
#[derive(Debug, Clone)]
pub struct TickLimiter {
    interval: f64,
    last_tick: Option<f64>,
}

impl TickLimiter {
    pub fn new(interval: f64) -> Self {
        Self { interval, last_tick: None }
    }

    /// True when a tick is due at `now`. The first call always ticks.
    pub fn ready(&mut self, now: f64) -> bool {
        match self.last_tick {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }
}
